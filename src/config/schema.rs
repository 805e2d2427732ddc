//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gallery
//! service. All types derive Serde traits for deserialization from config files,
//! and every section has defaults so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the gallery service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GalleryConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Access gate settings (allowlist, forwarded-header trust).
    pub access: AccessConfig,

    /// Gallery content settings (root directory, file names, page chrome).
    pub gallery: GallerySettings,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Access gate configuration.
///
/// The allowlist holds literal address strings compared with exact equality.
/// No CIDR ranges, no IPv6 canonicalization: what is written here must match
/// the candidate address byte for byte.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Addresses permitted through the gate. Empty means nobody gets in.
    pub allowed_addresses: Vec<String>,

    /// Whether to prefer the first `X-Forwarded-For` entry over the peer
    /// address. Only enable behind a proxy that overwrites the header;
    /// the value is client-controllable otherwise.
    pub trust_forwarded_header: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allowed_addresses: Vec::new(),
            trust_forwarded_header: true,
        }
    }
}

/// Gallery content configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Directory whose immediate subdirectories become tiles.
    pub root_dir: PathBuf,

    /// JSON file (relative to `root_dir`) mapping directory names to display
    /// names. Missing or malformed file degrades to raw directory names.
    pub names_file: String,

    /// Background image file name looked up inside each subdirectory.
    pub per_dir_background: String,

    /// Site-wide fallback background, relative to `root_dir`.
    pub default_background: String,

    /// Page `<title>`.
    pub title: String,

    /// Visible page heading.
    pub heading: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            names_file: "subjects-names.json".to_string(),
            per_dir_background: "background.jpg".to_string(),
            default_background: ".github/img/background.jpg".to_string(),
            title: "Exercise gallery".to_string(),
            heading: "Exercise gallery".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
