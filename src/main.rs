use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use gallery_gate::config::{self, GalleryConfig};
use gallery_gate::lifecycle::Shutdown;
use gallery_gate::observability::init_logging;
use gallery_gate::HttpServer;

/// IP-gated static directory gallery.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => GalleryConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!("gallery-gate v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        root_dir = %config.gallery.root_dir.display(),
        allowed_addresses = config.access.allowed_addresses.len(),
        trust_forwarded_header = config.access.trust_forwarded_header,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.access.allowed_addresses.is_empty() {
        tracing::warn!("allowlist is empty; every visitor will be denied");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Ctrl-C drives the coordinator; the server drains and returns.
    let shutdown = Shutdown::new();
    let signal_listener = shutdown.listener();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
        }
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, signal_listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
