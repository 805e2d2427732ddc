//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → security::access_gate (allow / 403)
//!     → gallery::render_index (200, or 500 on unreadable root)
//!     → Send to client
//! ```

pub mod server;

pub use server::HttpServer;
