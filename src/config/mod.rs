//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → http server, dispatcher default CORS, observability
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal (or missing) configs
//! - Validation separates syntactic (serde) from semantic checks
//! - `WEBAPP_DEFAULT_CORS_OPTION` overrides the file's default CORS origin

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, ConfigError, DEFAULT_CORS_ENV};
pub use schema::{
    AppConfig, CompressionConfig, CorsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
