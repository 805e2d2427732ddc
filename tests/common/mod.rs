//! Shared utilities for integration tests.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use gallery_gate::config::GalleryConfig;
use gallery_gate::lifecycle::Shutdown;
use gallery_gate::HttpServer;

/// Spawn a gallery server on an ephemeral port.
///
/// The listener is bound before the task is spawned, so requests made right
/// away queue instead of racing the accept loop.
pub async fn spawn_gallery(config: GalleryConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.listener();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Config pointing at `root` with the given allowlist.
pub fn config_for(root: &Path, allowed: &[&str]) -> GalleryConfig {
    let mut config = GalleryConfig::default();
    config.gallery.root_dir = root.to_path_buf();
    config.access.allowed_addresses = allowed.iter().map(|s| s.to_string()).collect();
    config
}

/// Create topic subdirectories under `root`.
#[allow(dead_code)]
pub fn make_topic_dirs(root: &Path, names: &[&str]) {
    for name in names {
        fs::create_dir(root.join(name)).unwrap();
    }
}
