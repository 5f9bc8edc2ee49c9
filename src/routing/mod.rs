//! Path resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Request path ("/withDefault/missingpage/third")
//!     → root.rs (load current root, or build one from the factory)
//!     → resolver.rs (walk segments, record visited nodes)
//!     → fallback.rs (index page, nearest "default", global default)
//!     → Return: exactly one exposed handler
//! ```
//!
//! # Design Decisions
//! - Resolution never fails; unknown paths land on some default handler
//! - The first missing segment stops the walk, later segments are ignored
//! - Visited nodes are scanned deepest-first for a `default` attribute
//! - Exposure is checked on the final candidate, not during the walk
//! - Root and global default live in swappable slots, read per request

pub mod fallback;
pub mod resolver;
pub mod root;

pub use fallback::{default_handler, index_handler, missing_page, GlobalDefault};
pub use resolver::{resolve, Resolution, Via};
pub use root::{Root, RootSlot};
