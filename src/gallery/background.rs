//! Background image resolution.
//!
//! Three tiers, checked in order: the directory's own `background.jpg`, the
//! site-wide default, and finally an embedded placeholder. The renderer is
//! guaranteed an image reference either way.

use std::path::Path;

use crate::config::GallerySettings;

/// Inline SVG shown when neither a per-directory nor a default background
/// exists: a gray box with "Not Found" text.
pub const PLACEHOLDER_URI: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22250%22%20height%3D%22150%22%20viewBox%3D%220%200%20250%20150%22%20preserveAspectRatio%3D%22none%22%3E%3Cdefs%3E%3Cstyle%20type%3D%22text%2Fcss%22%3E%23holder_18cc3c8ac91%20text%20%7B%20fill%3Argba(255%2C255%2C255%2C.75)%3Bfont-weight%3Anormal%3Bfont-family%3AHelvetica%2C%20monospace%3Bfont-size%3A13pt%20%7D%20%3C%2Fstyle%3E%3C%2Fdefs%3E%3Cg%20id%3D%22holder_18cc3c8ac91%22%3E%3Crect%20width%3D%22250%22%20height%3D%22150%22%20fill%3D%22%23777%22%3E%3C%2Frect%3E%3Cg%3E%3Ctext%20x%3D%2285%22%20y%3D%2280%22%3ENot%20Found%3C%2Ftext%3E%3C%2Fg%3E%3C%2Fg%3E%3C%2Fsvg%3E";

/// Resolve the background image reference for directory `dir`.
///
/// Returns a path relative to the gallery root (usable directly in the page)
/// or the placeholder data URI. Only existence is checked; no other file
/// names or formats are considered.
pub async fn resolve_background(root: &Path, dir: &str, settings: &GallerySettings) -> String {
    let per_dir = format!("{dir}/{}", settings.per_dir_background);
    if file_exists(&root.join(&per_dir)).await {
        return per_dir;
    }

    if file_exists(&root.join(&settings.default_background)).await {
        return settings.default_background.clone();
    }

    PLACEHOLDER_URI.to_string()
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn prefers_per_directory_background() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Algebra")).unwrap();
        fs::write(root.path().join("Algebra/background.jpg"), b"jpg").unwrap();
        fs::create_dir_all(root.path().join(".github/img")).unwrap();
        fs::write(root.path().join(".github/img/background.jpg"), b"jpg").unwrap();

        let settings = GallerySettings::default();
        let resolved = resolve_background(root.path(), "Algebra", &settings).await;
        assert_eq!(resolved, "Algebra/background.jpg");
    }

    #[tokio::test]
    async fn falls_back_to_site_default() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Algebra")).unwrap();
        fs::create_dir_all(root.path().join(".github/img")).unwrap();
        fs::write(root.path().join(".github/img/background.jpg"), b"jpg").unwrap();

        let settings = GallerySettings::default();
        let resolved = resolve_background(root.path(), "Algebra", &settings).await;
        assert_eq!(resolved, ".github/img/background.jpg");
    }

    #[tokio::test]
    async fn falls_back_to_placeholder() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Algebra")).unwrap();

        let settings = GallerySettings::default();
        let resolved = resolve_background(root.path(), "Algebra", &settings).await;
        assert_eq!(resolved, PLACEHOLDER_URI);
    }
}
