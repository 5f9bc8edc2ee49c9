//! Errors raised from inside handler bodies.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler could not produce a response.
    #[error("handler failed: {0}")]
    Failed(String),

    /// An argument was present but unusable.
    #[error("invalid argument `{key}`: {reason}")]
    InvalidArgument { key: String, reason: String },

    /// Encoding the response body failed.
    #[error("codec error: {0}")]
    Codec(#[from] std::io::Error),
}
