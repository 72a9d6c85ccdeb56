//! Startup wiring for the configuration subsystem.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::loader::load_config;
use crate::config::store::ConfigStore;
use crate::config::watcher::{ConfigWatcher, ReloadHandle, WatchConfig};
use crate::lifecycle::Shutdown;

/// Perform the initial configuration load and start the background watcher.
///
/// With no path configured the store is left empty, no watcher is started,
/// and the service runs on defaults. A failed initial load is a warning,
/// not a startup failure: the watcher still starts, so a corrected file is
/// picked up without a restart.
///
/// Returns a [`ReloadHandle`] when a watcher was started.
///
/// Must be called from within a Tokio runtime (the watcher is spawned).
pub fn init<C>(
    path: Option<PathBuf>,
    store: &Arc<ConfigStore<C>>,
    shutdown: &Shutdown,
    watch: WatchConfig,
) -> Option<ReloadHandle>
where
    C: DeserializeOwned + Send + Sync + 'static,
{
    let Some(path) = path else {
        tracing::info!("No config file specified, using default configuration");
        return None;
    };

    // Constructed before the load so its mtime baseline predates the read;
    // a write racing the load is re-detected by the first poll instead of
    // being missed.
    let watcher = ConfigWatcher::new(path.clone(), store.clone(), watch);

    match load_config::<C>(&path) {
        Ok(config) => {
            store.set(config);
            tracing::info!(path = %path.display(), "Configuration loaded");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to load config file, using default configuration"
            );
        }
    }

    let handle = watcher.reload_handle();
    tokio::spawn(watcher.run(shutdown.subscribe()));

    Some(handle)
}
