//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router and middleware stack from the boot snapshot
//! - Serve until the shutdown signal fires
//! - Expose `/healthz` reading the current config snapshot per request
//!
//! Middleware limits bind at startup; handlers always see the live
//! configuration through the store.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigStore, ServiceConfig};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConfigStore<ServiceConfig>>,
}

/// HTTP server for the host service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create the server. Limits come from the snapshot committed at boot,
    /// or from defaults when no configuration was loaded.
    pub fn new(store: Arc<ConfigStore<ServiceConfig>>) -> Self {
        let limits = store
            .get()
            .map(|config| config.limits.clone())
            .unwrap_or_default();

        let state = AppState { store };
        let router = Router::new()
            .route("/healthz", get(healthz))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(limits.request_timeout_secs)))
            .layer(DefaultBodyLimit::max(limits.max_body_bytes))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires. In-flight requests drain gracefully.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Health endpoint.
///
/// Reads the store on every request: a reload committed between two
/// requests is visible in the response with no coordination here.
async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let config = state
        .store
        .get()
        .unwrap_or_else(|| Arc::new(ServiceConfig::default()));

    Json(json!({
        "status": "ok",
        "service": config.service.name,
        "environment": config.service.environment,
        "config_generation": state.store.generation(),
    }))
}
