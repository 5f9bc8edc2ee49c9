//! Index and default handler lookup.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::handler::{Expose, Exposed};
use crate::tree::{Child, Node};

pub const INDEX: &str = "index";
pub const DEFAULT: &str = "default";

/// Stock global default: reports the requested path as missing.
pub fn missing_page() -> Arc<Exposed> {
    Expose::html().handler(|call| Ok(format!("Missing Page: {}", call.path()).into()))
}

/// The last-resort handler used when no node on the path has a default.
///
/// Read on every resolution, so [`set`](Self::set) takes effect on the
/// next request.
pub struct GlobalDefault {
    slot: ArcSwap<Exposed>,
}

impl GlobalDefault {
    pub fn new(handler: Arc<Exposed>) -> Self {
        Self {
            slot: ArcSwap::new(handler),
        }
    }

    pub fn get(&self) -> Arc<Exposed> {
        self.slot.load_full()
    }

    /// Install `handler`, returning the one it replaces.
    pub fn set(&self, handler: Arc<Exposed>) -> Arc<Exposed> {
        tracing::debug!("Global default handler replaced");
        self.slot.swap(handler)
    }

    /// Go back to [`missing_page`].
    pub fn reset(&self) {
        self.slot.store(missing_page());
    }
}

impl Default for GlobalDefault {
    fn default() -> Self {
        Self::new(missing_page())
    }
}

/// `index` of the deepest visited node, if it is an exposed handler.
pub fn index_handler(visited: &[Arc<dyn Node>]) -> Option<Arc<Exposed>> {
    let node = visited.last()?;
    match node.lookup(INDEX) {
        Some(Child::Handler(handler)) => Some(handler),
        _ => None,
    }
}

/// Nearest exposed `default`, scanning from the deepest visited node up
/// to the root, else the global default.
pub fn default_handler(visited: &[Arc<dyn Node>], global: &GlobalDefault) -> Arc<Exposed> {
    visited
        .iter()
        .rev()
        .find_map(|node| match node.lookup(DEFAULT) {
            Some(Child::Handler(handler)) => Some(handler),
            _ => None,
        })
        .unwrap_or_else(|| global.get())
}
