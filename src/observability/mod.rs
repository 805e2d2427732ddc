//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request ID set by the HTTP layer
//!   flows through span fields
//! - No metrics endpoint: the service renders one small page for a handful of
//!   visitors, logs are enough

pub mod logging;

pub use logging::init_logging;
