//! Node capability and attribute values.

use std::fmt;
use std::sync::Arc;

use crate::handler::Exposed;

/// A callable reachable by attribute name but never registered for the
/// web. The dispatcher treats it as if it did not exist.
pub struct Function {
    func: Arc<dyn Fn() -> String + Send + Sync>,
}

impl Function {
    pub fn new<F>(func: F) -> Arc<Self>
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Arc::new(Self { func: Arc::new(func) })
    }

    /// Call it directly, outside of any request.
    pub fn call(&self) -> String {
        (self.func)()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

/// The value of a node attribute.
#[derive(Clone)]
pub enum Child {
    Node(Arc<dyn Node>),
    Handler(Arc<Exposed>),
    Function(Arc<Function>),
    /// The attribute exists but holds nothing.
    Empty,
}

impl Child {
    pub fn is_callable(&self) -> bool {
        matches!(self, Child::Handler(_) | Child::Function(_))
    }

    /// The exposed handler, if this attribute is one.
    pub fn exposed(&self) -> Option<&Arc<Exposed>> {
        match self {
            Child::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn node(&self) -> Option<&Arc<dyn Node>> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(node) => write!(f, "Node({})", node.type_name()),
            Child::Handler(handler) => write!(f, "Handler({:?})", handler.descriptor().content_type),
            Child::Function(_) => f.write_str("Function"),
            Child::Empty => f.write_str("Empty"),
        }
    }
}

/// An object in the routing tree.
///
/// Implemented by [`Site`](crate::tree::Site) and
/// [`Container`](crate::tree::Container); applications with dynamic
/// trees can implement it directly.
pub trait Node: Send + Sync {
    /// Name reported as the owning handler in the sitemap.
    fn type_name(&self) -> &str;

    /// Attribute by exact name; `None` when it does not exist.
    fn lookup(&self, name: &str) -> Option<Child>;

    /// Whether this node takes part in index/default disambiguation and
    /// sitemap traversal.
    fn is_site(&self) -> bool {
        false
    }

    /// All attributes, sorted by name.
    fn attributes(&self) -> Vec<(String, Child)>;
}
