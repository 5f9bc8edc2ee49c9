//! Sitemap of exposed endpoints.
//!
//! # Responsibilities
//! - Walk the node tree depth-first from the root
//! - List every exposed handler under its URL
//! - List each site's own path when it has an index page
//!
//! # Design Decisions
//! - Independent of the resolver; walks attributes directly
//! - Only site markers contribute entries or are descended into
//! - Attributes are visited in name order

pub mod builder;

pub use builder::{build_sitemap, SitemapEntry};
