//! The root reference of the node tree.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::tree::Node;

/// Builds a fresh root node for each request.
pub type RootFactory = Arc<dyn Fn() -> Option<Arc<dyn Node>> + Send + Sync>;

/// What the dispatcher walks from.
#[derive(Clone, Default)]
pub enum Root {
    /// No tree; everything resolves to the global default.
    #[default]
    Empty,
    Node(Arc<dyn Node>),
    Factory(RootFactory),
}

impl Root {
    pub fn node<N: Node + 'static>(node: N) -> Self {
        Root::Node(Arc::new(node))
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> Option<Arc<dyn Node>> + Send + Sync + 'static,
    {
        Root::Factory(Arc::new(factory))
    }

    /// The root node for one request. Factories are invoked on every call.
    pub fn instantiate(&self) -> Option<Arc<dyn Node>> {
        match self {
            Root::Empty => None,
            Root::Node(node) => Some(Arc::clone(node)),
            Root::Factory(factory) => factory(),
        }
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Empty => f.write_str("Empty"),
            Root::Node(node) => write!(f, "Node({})", node.type_name()),
            Root::Factory(_) => f.write_str("Factory"),
        }
    }
}

/// Process-wide slot holding the current [`Root`].
///
/// Readers always see a complete root; a concurrent `store` is picked up
/// by the next `load`.
pub struct RootSlot {
    slot: ArcSwap<Root>,
}

impl RootSlot {
    pub fn new(root: Root) -> Self {
        Self {
            slot: ArcSwap::from_pointee(root),
        }
    }

    pub fn load(&self) -> Arc<Root> {
        self.slot.load_full()
    }

    pub fn store(&self, root: Root) {
        tracing::info!(root = ?root, "Root replaced");
        self.slot.store(Arc::new(root));
    }
}

impl Default for RootSlot {
    fn default() -> Self {
        Self::new(Root::Empty)
    }
}
