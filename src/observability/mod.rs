//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher, http adapter, config
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request counters and latency histogram)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Metric calls are no-ops until a recorder is installed
//! - Log level configurable via config and environment

pub mod logging;
pub mod metrics;
