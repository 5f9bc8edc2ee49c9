//! Map-backed nodes.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::handler::Exposed;
use crate::tree::node::{Child, Function, Node};

/// Named attributes of a node, kept sorted by name.
#[derive(Clone, Default)]
pub struct Attributes {
    entries: BTreeMap<String, Child>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<Child> {
        self.entries.get(name).cloned()
    }

    pub fn insert(&mut self, name: impl Into<String>, child: Child) {
        self.entries.insert(name.into(), child);
    }

    pub fn remove(&mut self, name: &str) -> Option<Child> {
        self.entries.remove(name)
    }

    pub fn to_vec(&self) -> Vec<(String, Child)> {
        self.entries
            .iter()
            .map(|(name, child)| (name.clone(), child.clone()))
            .collect()
    }
}

macro_rules! attribute_builders {
    ($ty:ident) => {
        impl $ty {
            pub fn handler(mut self, name: impl Into<String>, handler: Arc<Exposed>) -> Self {
                self.attrs.insert(name, Child::Handler(handler));
                self
            }

            /// Attach a callable that is not exposed to the web.
            pub fn function(mut self, name: impl Into<String>, function: Arc<Function>) -> Self {
                self.attrs.insert(name, Child::Function(function));
                self
            }

            pub fn child<N: Node + 'static>(mut self, name: impl Into<String>, node: N) -> Self {
                self.attrs.insert(name, Child::Node(Arc::new(node)));
                self
            }

            /// Attribute that exists but holds no value.
            pub fn empty(mut self, name: impl Into<String>) -> Self {
                self.attrs.insert(name, Child::Empty);
                self
            }

            pub fn attrs(&self) -> &Attributes {
                &self.attrs
            }

            pub fn attrs_mut(&mut self) -> &mut Attributes {
                &mut self.attrs
            }
        }
    };
}

/// A site marker node.
#[derive(Clone)]
pub struct Site {
    name: String,
    attrs: Attributes,
}

impl Site {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::default(),
        }
    }
}

attribute_builders!(Site);

impl Node for Site {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, name: &str) -> Option<Child> {
        self.attrs.get(name)
    }

    fn is_site(&self) -> bool {
        true
    }

    fn attributes(&self) -> Vec<(String, Child)> {
        self.attrs.to_vec()
    }
}

/// A plain grouping node. Its children are reachable by path, but it has
/// no index page of its own and is left out of the sitemap.
#[derive(Clone)]
pub struct Container {
    name: String,
    attrs: Attributes,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::default(),
        }
    }
}

attribute_builders!(Container);

impl Node for Container {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, name: &str) -> Option<Child> {
        self.attrs.get(name)
    }

    fn attributes(&self) -> Vec<(String, Child)> {
        self.attrs.to_vec()
    }
}
