//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GalleryConfig (validated, immutable)
//!     → shared via Arc to the server and gate
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart. The allowlist
//!   is fixed at deploy time and there is no runtime API to mutate it.
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AccessConfig, GalleryConfig, GallerySettings, ListenerConfig, ObservabilityConfig,
    TimeoutConfig,
};
