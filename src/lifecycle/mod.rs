//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Ordered startup: config first, then listener, then server
//! - Shutdown is cooperative: the server drains in-flight requests once the
//!   coordinator fires

pub mod shutdown;

pub use shutdown::{Shutdown, ShutdownListener};
