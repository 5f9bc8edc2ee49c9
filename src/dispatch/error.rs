//! Dispatch errors.

use axum::http::Method;
use thiserror::Error;

use crate::handler::{HandlerError, MethodSet};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Terminal; the transport answers 405 and advertises `allowed`.
    #[error("method {method} not allowed, expected one of: {}", .allowed.allow_header())]
    MethodNotAllowed { method: Method, allowed: MethodSet },

    /// The caller supplied an argument name the dispatcher injects itself.
    #[error("`{0}` is a reserved argument name")]
    ReservedKey(String),

    /// The handler cannot bind the supplied named arguments.
    #[error("handler does not accept arguments {rejected:?} (declared arity {arity})")]
    ArityMismatch { rejected: Vec<String>, arity: usize },

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl DispatchError {
    /// Methods to advertise in `Allow`, for method-not-allowed failures.
    pub fn allowed(&self) -> Option<&MethodSet> {
        match self {
            DispatchError::MethodNotAllowed { allowed, .. } => Some(allowed),
            _ => None,
        }
    }
}
