//! IP-gated static directory gallery.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 GALLERY-GATE                  │
//!                    │                                               │
//!   Client Request   │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│   http   │──▶│ security │──▶│ gallery  │  │
//!                    │  │  server  │   │   gate   │   │ renderer │  │
//!                    │  └──────────┘   └────┬─────┘   └────┬─────┘  │
//!                    │                      │              │        │
//!   403 Denied       │                      │              │        │
//!   ◀────────────────┼──────────────────────┘              │        │
//!   200 Gallery      │                                     │        │
//!   ◀────────────────┼─────────────────────────────────────┘        │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                    │  │  │ config │ │observability│ │lifecycle│ │ │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Two responsibilities per request, executed in order: the access gate
//! compares the visitor's address against a fixed allowlist (403 on mismatch),
//! then the renderer enumerates the gallery root's subdirectories and emits
//! one link-tile per directory with a resolved background image and display
//! name. Everything is stateless and recomputed per request.

// Core subsystems
pub mod config;
pub mod gallery;
pub mod http;
pub mod security;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GalleryConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
