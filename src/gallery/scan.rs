//! Directory enumeration.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Error produced when the gallery root cannot be enumerated.
#[derive(Debug, thiserror::Error)]
#[error("failed to read gallery root {path:?}: {source}")]
pub struct RootUnreadable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// List the immediate subdirectories of `root`, sorted ascending.
///
/// Entries whose names start with a dot are excluded, as are non-directories.
/// Names that are not valid UTF-8 cannot appear in the page and are skipped.
pub async fn list_topic_dirs(root: &Path) -> Result<Vec<String>, RootUnreadable> {
    let into_err = |source| RootUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(root).await.map_err(into_err)?;
    let mut dirs = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(into_err)? {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!(name = ?raw, "skipping non-UTF-8 directory name");
                continue;
            }
        };

        if name.starts_with('.') {
            continue;
        }

        // An entry that vanishes mid-scan is dropped, not fatal.
        match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => dirs.push(name),
            Ok(_) => {}
            Err(error) => debug!(name = %name, %error, "skipping unreadable entry"),
        }
    }

    dirs.sort();
    Ok(dirs)
}
