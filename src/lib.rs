//! Hierarchical request dispatcher.
//!
//! Maps a request path onto a tree of nodes whose attributes are path
//! segments, falling back to the nearest `default` handler when a
//! segment is missing, and answering with a site's `index` when the path
//! names the site itself.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod observability;
pub mod query;
pub mod routing;
pub mod sitemap;
pub mod tree;

pub use config::AppConfig;
pub use dispatch::{DispatchError, Dispatcher, RequestContext};
pub use handler::{Accepts, Expose, Exposed, HandlerError, Payload};
pub use http::HttpServer;
pub use query::{parse_query, QueryArgs, QueryValue};
pub use routing::Root;
pub use sitemap::SitemapEntry;
pub use tree::{Container, Function, Node, Site};
