//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Validation is a pure function over the config and returns every problem it
//! finds, not just the first, so a broken deploy can be fixed in one pass.

use std::net::SocketAddr;

use crate::config::schema::GalleryConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("access.allowed_addresses[{index}] is empty")]
    EmptyAllowlistEntry { index: usize },

    #[error("access.allowed_addresses[{index}] {value:?} contains whitespace")]
    WhitespaceInAllowlistEntry { index: usize, value: String },

    #[error("gallery.{field} {value:?} must be a bare file name, not a path")]
    FileNameIsPath { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &GalleryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for (index, entry) in config.access.allowed_addresses.iter().enumerate() {
        if entry.is_empty() {
            errors.push(ValidationError::EmptyAllowlistEntry { index });
        } else if entry.chars().any(char::is_whitespace) {
            errors.push(ValidationError::WhitespaceInAllowlistEntry {
                index,
                value: entry.clone(),
            });
        }
    }

    // The names file and the per-directory background are joined onto
    // directory paths at request time; a separator here would escape the root.
    for (field, value) in [
        ("names_file", &config.gallery.names_file),
        ("per_dir_background", &config.gallery.per_dir_background),
    ] {
        if value.contains('/') || value.contains('\\') {
            errors.push(ValidationError::FileNameIsPath {
                field,
                value: value.clone(),
            });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::GalleryConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GalleryConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = GalleryConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.access.allowed_addresses = vec!["".into(), "10.0.0.1 ".into()];
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn rejects_path_separators_in_file_names() {
        let mut config = GalleryConfig::default();
        config.gallery.names_file = "../secrets.json".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::FileNameIsPath { field: "names_file", .. }]
        ));
    }
}
