//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! GET/POST/OPTIONS + RequestContext (path, raw query, header sink)
//!     → routing (resolve exactly one handler)
//!     → method admission (405 with allow-list on failure)
//!     → Allow + CORS headers
//!     → [OPTIONS stops here with an empty body]
//!     → Content-Type / Content-Encoding headers
//!     → query (parse arguments, add `_post` for POST)
//!     → handler invocation (retry without arguments for arity <= 1)
//! ```
//!
//! # Design Decisions
//! - Header writes are strictly ordered: admission, content, then the handler
//! - `_post` is reserved; a caller-supplied `_post` on POST is an error
//! - The global default is owned by the dispatcher, not a bare global

pub mod context;
pub mod dispatcher;
pub mod error;

pub use context::RequestContext;
pub use dispatcher::Dispatcher;
pub use error::DispatchError;

/// Argument added to every POST invocation.
pub const POST_FLAG: &str = "_post";
