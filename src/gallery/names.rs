//! Display-name overrides.
//!
//! A flat JSON object at the gallery root maps directory names to friendlier
//! display names. The file is cosmetic: a missing or malformed file must never
//! block the page, so the load result carries the degradation explicitly
//! instead of hiding it behind swallowed control flow.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

/// Outcome of loading the name-override file.
///
/// Every variant renders: the non-`Loaded` variants just mean every directory
/// falls back to its raw name.
#[derive(Debug)]
pub enum NameOverrides {
    /// File existed and parsed; lookup misses still fall back per entry.
    Loaded(HashMap<String, String>),
    /// No override file present.
    FileMissing,
    /// File present but unreadable or not a valid JSON object.
    Malformed,
}

impl NameOverrides {
    /// Load overrides from `path`, degrading instead of failing.
    pub async fn load(path: &Path) -> Self {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return NameOverrides::FileMissing;
            }
            Err(error) => {
                debug!(path = %path.display(), %error, "name-override file unreadable");
                return NameOverrides::Malformed;
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&content) {
            Ok(map) => NameOverrides::Loaded(map),
            Err(error) => {
                debug!(path = %path.display(), %error, "name-override file malformed");
                NameOverrides::Malformed
            }
        }
    }

    /// Display name for `dir`: the override if one exists, else `dir` itself.
    pub fn resolve<'a>(&'a self, dir: &'a str) -> &'a str {
        match self {
            NameOverrides::Loaded(map) => map.get(dir).map(String::as_str).unwrap_or(dir),
            NameOverrides::FileMissing | NameOverrides::Malformed => dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn override_applies_and_misses_fall_back() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("subjects-names.json");
        fs::write(&path, r#"{"Algebra": "Basic Algebra"}"#).unwrap();

        let overrides = NameOverrides::load(&path).await;
        assert!(matches!(overrides, NameOverrides::Loaded(_)));
        assert_eq!(overrides.resolve("Algebra"), "Basic Algebra");
        assert_eq!(overrides.resolve("Geometry"), "Geometry");
    }

    #[tokio::test]
    async fn missing_file_falls_back() {
        let root = tempfile::tempdir().unwrap();
        let overrides = NameOverrides::load(&root.path().join("subjects-names.json")).await;
        assert!(matches!(overrides, NameOverrides::FileMissing));
        assert_eq!(overrides.resolve("Algebra"), "Algebra");
    }

    #[tokio::test]
    async fn malformed_json_falls_back_without_error() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("subjects-names.json");
        fs::write(&path, "{ this is not json").unwrap();

        let overrides = NameOverrides::load(&path).await;
        assert!(matches!(overrides, NameOverrides::Malformed));
        assert_eq!(overrides.resolve("Algebra"), "Algebra");
    }

    #[tokio::test]
    async fn non_object_json_is_malformed() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("subjects-names.json");
        fs::write(&path, r#"["Algebra"]"#).unwrap();

        let overrides = NameOverrides::load(&path).await;
        assert!(matches!(overrides, NameOverrides::Malformed));
    }
}
