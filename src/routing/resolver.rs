//! Path → handler resolution.

use std::sync::Arc;

use crate::handler::Exposed;
use crate::routing::fallback::{default_handler, index_handler, GlobalDefault};
use crate::routing::root::Root;
use crate::tree::{Child, Node};

/// How the handler was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    /// The path named an exposed handler.
    Exact,
    /// The path named a site; its `index` answered.
    Index,
    /// Nearest `default` on the path, or the global default.
    Fallback,
}

impl Via {
    pub fn as_str(self) -> &'static str {
        match self {
            Via::Exact => "exact",
            Via::Index => "index",
            Via::Fallback => "fallback",
        }
    }
}

/// Outcome of resolving one path.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub handler: Arc<Exposed>,
    pub via: Via,
}

impl Resolution {
    fn fallback(handler: Arc<Exposed>) -> Self {
        Self {
            handler,
            via: Via::Fallback,
        }
    }
}

/// Resolve `path` (no query string) against the tree under `root`.
///
/// Segments are matched as attribute names starting at the root. The
/// first missing attribute, or the first empty segment, ends the walk.
/// A site reached at the end answers with its `index`; anything that is
/// not an exposed handler falls back to the nearest `default`.
pub fn resolve(root: &Root, path: &str, global: &GlobalDefault) -> Resolution {
    let Some(root_node) = root.instantiate() else {
        return Resolution::fallback(default_handler(&[], global));
    };

    let mut visited: Vec<Arc<dyn Node>> = vec![Arc::clone(&root_node)];
    let mut current = Child::Node(root_node);

    for segment in path.split('/').skip(1) {
        if segment.is_empty() {
            break;
        }

        let found = match &current {
            Child::Node(node) => node.lookup(segment),
            _ => None,
        };

        match found {
            Some(child) => {
                if let Child::Node(node) = &child {
                    visited.push(Arc::clone(node));
                }
                current = child;
            }
            None => {
                tracing::trace!(path = %path, segment = %segment, "Segment not found");
                return Resolution::fallback(default_handler(&visited, global));
            }
        }
    }

    match current {
        Child::Handler(handler) => Resolution {
            handler,
            via: Via::Exact,
        },
        Child::Node(node) if node.is_site() => match index_handler(&visited) {
            Some(handler) => Resolution {
                handler,
                via: Via::Index,
            },
            None => Resolution::fallback(default_handler(&visited, global)),
        },
        // unexposed callables, plain containers, empty attributes
        _ => Resolution::fallback(default_handler(&visited, global)),
    }
}
