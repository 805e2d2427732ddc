//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with the index handler
//! - Wire up middleware (tracing, request ID, timeout, access gate)
//! - Serve on a listener until shutdown
//!
//! The whole router sits behind the access gate, so even unknown paths answer
//! 403 to a disallowed visitor rather than leaking a 404.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{GalleryConfig, GallerySettings};
use crate::gallery;
use crate::gallery::render::error_page;
use crate::lifecycle::ShutdownListener;
use crate::security::{access_gate, Allowlist, GateState};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<GallerySettings>,
}

/// HTTP server for the gallery.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GalleryConfig) -> Self {
        let allowlist = Arc::new(Allowlist::new(config.access.allowed_addresses.clone()));
        let gate = GateState {
            allowlist,
            trust_forwarded_header: config.access.trust_forwarded_header,
        };
        let state = AppState {
            settings: Arc::new(config.gallery.clone()),
        };

        let router = Self::build_router(&config, state, gate);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GalleryConfig, state: AppState, gate: GateState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, access_gate))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Index handler: renders the gallery for visitors the gate let through.
async fn index_handler(State(state): State<AppState>) -> Response {
    match gallery::render_index(&state.settings).await {
        Ok(page) => Html(page).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to render gallery");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(error_page())).into_response()
        }
    }
}
