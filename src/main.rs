//! Standalone host binary.
//!
//! Wires the configuration subsystem to a thin HTTP service:
//! read `CONFIG_FILE` from the environment, perform the initial load, start
//! the background watcher, then serve until a termination signal.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config_reload::config::{self, WatchConfig};
use config_reload::lifecycle::signals;
use config_reload::observability::metrics;
use config_reload::{ConfigStore, HttpServer, ServiceConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "config_reload=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("config-reload v0.1.0 starting");

    let store = Arc::new(ConfigStore::<ServiceConfig>::new());
    let shutdown = Shutdown::new();

    let reload = config::init(
        config_file_from_env(),
        &store,
        &shutdown,
        WatchConfig::default(),
    );

    let boot = store
        .get()
        .unwrap_or_else(|| Arc::new(ServiceConfig::default()));
    tracing::info!(
        service = %boot.service.name,
        environment = %boot.service.environment,
        generation = store.generation(),
        "Configuration active"
    );

    if boot.observability.metrics_enabled {
        match boot.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %boot.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    tokio::spawn(signals::listen(shutdown.clone(), reload));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or_else(|| {
            tracing::info!("Defaulting to port 8080");
            8080
        });
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    let server = HttpServer::new(store.clone());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// `CONFIG_FILE` from the environment, absolutized so the watcher is not
/// affected by later working-directory changes. Absent or empty means no
/// file is loaded and no watcher is started.
fn config_file_from_env() -> Option<PathBuf> {
    let path = env::var("CONFIG_FILE").ok()?;
    if path.is_empty() {
        return None;
    }
    let path = PathBuf::from(path);
    Some(std::path::absolute(&path).unwrap_or(path))
}
