//! HTTP transport adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum catch-all route, tracing/timeout/request-id layers)
//!     → context.rs (path, raw query, response header sink)
//!     → Dispatcher (resolve, admit, invoke)
//!     → server.rs (200 + headers, 405 + Allow, or 500)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Request bodies are not read; handlers see only the query string
//! - Handlers run inline on the request task (they are synchronous)

pub mod context;
pub mod server;

pub use context::HttpContext;
pub use server::{AppState, HttpServer};
