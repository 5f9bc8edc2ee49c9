//! Query string parsing.
//!
//! # Data Flow
//! ```text
//! raw query ("?a=1&a=2&flag")
//!     → parser.rs (trim, split on '&', split on first '=', percent-decode value)
//!     → value.rs (accumulate repeated keys into ordered lists)
//!     → QueryArgs handed to the handler as named arguments
//! ```
//!
//! # Design Decisions
//! - A parameter without '=' is a boolean flag, not an empty string
//! - Keys are taken verbatim; only values are percent-decoded
//! - Repeated keys keep encounter order, flags and strings mixed

pub mod parser;
pub mod value;

pub use parser::parse_query;
pub use value::{QueryArgs, QueryValue};
