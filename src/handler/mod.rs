//! Exposed handlers and their metadata.
//!
//! # Responsibilities
//! - Describe how an endpoint answers (content type, encoding, CORS, methods)
//! - Mark a callable as web-reachable
//! - Check supplied named arguments against the declared signature
//!
//! # Design Decisions
//! - Exposure is structural: only an [`Exposed`] can be selected as a handler
//! - `OPTIONS` is always an allowed method
//! - The arity used for the zero-argument retry is declared, never inferred

pub mod descriptor;
pub mod error;
pub mod expose;

pub use descriptor::{CorsOrigin, HandlerDescriptor, MethodSet};
pub use error::HandlerError;
pub use expose::{Accepts, Call, Expose, Exposed, HandlerFn, Payload};
