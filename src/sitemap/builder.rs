//! Depth-first sitemap construction.

use std::sync::Arc;

use serde::Serialize;

use crate::handler::Exposed;
use crate::routing::{index_handler, Root};
use crate::tree::{Child, Node};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    /// Type name of the node owning the handler.
    pub handler: String,
    pub description: String,
}

impl SitemapEntry {
    fn new(url: &str, owner: &dyn Node, handler: &Exposed) -> Self {
        Self {
            url: url.to_string(),
            handler: owner.type_name().to_string(),
            description: handler.descriptor().documentation.clone().unwrap_or_default(),
        }
    }
}

/// All exposed endpoints reachable from `root`, in traversal order.
pub fn build_sitemap(root: &Root) -> Vec<SitemapEntry> {
    let mut sitemap = Vec::new();
    if let Some(node) = root.instantiate() {
        traverse(&node, "/", &mut sitemap);
    }
    sitemap
}

fn traverse(node: &Arc<dyn Node>, path: &str, sitemap: &mut Vec<SitemapEntry>) {
    if !node.is_site() {
        return;
    }

    if let Some(index) = index_handler(std::slice::from_ref(node)) {
        sitemap.push(SitemapEntry::new(path, node.as_ref(), &index));
    }

    let base = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    };

    for (name, child) in node.attributes() {
        let url = format!("{base}{name}");
        match child {
            Child::Handler(handler) => sitemap.push(SitemapEntry::new(&url, node.as_ref(), &handler)),
            Child::Node(child) => traverse(&child, &url, sitemap),
            Child::Function(_) | Child::Empty => {}
        }
    }
}
