//! Gallery rendering subsystem.
//!
//! # Data Flow
//! ```text
//! request (already past the gate)
//!     → scan.rs (enumerate subdirectories, sort)
//!     → names.rs (load display-name overrides, per request)
//!     → background.rs (per-dir → site default → placeholder)
//!     → render.rs (escaped HTML page)
//! ```
//!
//! # Design Decisions
//! - Everything is computed fresh per request: no cache, no persisted state.
//!   Directory counts are small and staleness would be worse than the rescan.
//! - Filesystem reads are awaited (`tokio::fs`) so a slow disk never stalls
//!   the runtime.
//! - Only an unreadable root is an error; every cosmetic input degrades.

pub mod background;
pub mod names;
pub mod render;
pub mod scan;

use std::path::Path;

use chrono::Local;

use crate::config::GallerySettings;
use background::resolve_background;
use names::NameOverrides;
use render::{gallery_page, Tile};
use scan::{list_topic_dirs, RootUnreadable};

/// Build the complete gallery page for the configured root.
pub async fn render_index(settings: &GallerySettings) -> Result<String, RootUnreadable> {
    let root: &Path = &settings.root_dir;
    let dirs = list_topic_dirs(root).await?;
    let overrides = NameOverrides::load(&root.join(&settings.names_file)).await;

    let mut tiles = Vec::with_capacity(dirs.len());
    for dir in &dirs {
        let background = resolve_background(root, dir, settings).await;
        tiles.push(Tile {
            dir: dir.clone(),
            background,
            display_name: overrides.resolve(dir).to_string(),
        });
    }

    Ok(gallery_page(
        &settings.title,
        &settings.heading,
        &tiles,
        Local::now().date_naive(),
    ))
}
