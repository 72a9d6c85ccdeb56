//! Configuration file watcher for hot reload.
//!
//! # Responsibilities
//! - Poll the watched file's modification time on a fixed cadence
//! - Debounce after a detected change so truncate-then-write writers finish
//! - Reload and commit the new snapshot, or keep the previous one on failure
//! - Exit promptly when the shutdown signal fires
//!
//! # Design Decisions
//! - Polling over kernel file-event APIs: portable, and cheap at a 1s cadence
//! - A failed reload still advances the last-observed mtime, so a broken
//!   file is logged once per change rather than every poll cycle; operators
//!   can force a retry via [`ReloadHandle::trigger`] (wired to SIGHUP)
//! - A transient stat failure is not an error: the file may be mid-replace,
//!   and the next poll cycle retries naturally

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::{broadcast, Notify};
use tokio::time::{self, MissedTickBehavior};

use crate::config::loader::load_config;
use crate::config::store::ConfigStore;
use crate::observability::metrics;

/// Timing knobs for the watcher loop.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// How often the file's modification time is polled.
    pub poll_interval: Duration,

    /// Delay between detecting a change and re-reading the file.
    pub debounce: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            debounce: Duration::from_millis(100),
        }
    }
}

/// Handle for requesting a reload outside the polling cycle.
///
/// Cloneable and cheap; triggering while a reload is already pending
/// coalesces into a single reload.
#[derive(Clone)]
pub struct ReloadHandle {
    notify: Arc<Notify>,
}

impl ReloadHandle {
    /// Request an immediate reload, regardless of the file's mtime.
    pub fn trigger(&self) {
        self.notify.notify_one();
    }
}

/// A watcher that monitors one configuration file and commits reloaded
/// snapshots into a [`ConfigStore`].
///
/// The watcher owns its poll state; nothing outside the loop mutates it.
/// All failures inside the loop are recovered locally — the host service
/// never observes a panic or a half-applied configuration.
pub struct ConfigWatcher<C> {
    path: PathBuf,
    store: Arc<ConfigStore<C>>,
    watch: WatchConfig,
    trigger: Arc<Notify>,
    last_modified: Option<SystemTime>,
}

impl<C> ConfigWatcher<C>
where
    C: DeserializeOwned + Send + Sync + 'static,
{
    /// Create a watcher for `path` committing into `store`.
    ///
    /// The file as it exists at construction is the caller's to handle via
    /// the initial load; only later modifications trigger reloads. Callers
    /// construct the watcher *before* reading the file, so a write racing
    /// the startup load is re-detected rather than missed. A failed stat
    /// here leaves the baseline unknown, and the first successful stat then
    /// counts as a change — a file that was missing at startup is picked up
    /// once it appears.
    pub fn new(path: impl Into<PathBuf>, store: Arc<ConfigStore<C>>, watch: WatchConfig) -> Self {
        let path = path.into();
        let last_modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok();
        Self {
            path,
            store,
            watch,
            trigger: Arc::new(Notify::new()),
            last_modified,
        }
    }

    /// Handle for forcing a reload from outside the loop (e.g., on SIGHUP).
    pub fn reload_handle(&self) -> ReloadHandle {
        ReloadHandle {
            notify: self.trigger.clone(),
        }
    }

    /// Run the polling loop until the shutdown signal fires.
    ///
    /// Intended to be spawned as a background task; the caller is never
    /// blocked by a reload.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            path = %self.path.display(),
            poll_interval = ?self.watch.poll_interval,
            "Config watcher started"
        );

        let trigger = self.trigger.clone();
        let mut ticker = time::interval(self.watch.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll().await;
                }
                _ = trigger.notified() => {
                    tracing::info!(path = %self.path.display(), "Manual config reload requested");
                    self.last_modified = self.stat().await;
                    self.reload();
                }
                _ = shutdown.recv() => {
                    tracing::info!(path = %self.path.display(), "Config watcher stopping");
                    break;
                }
            }
        }
    }

    /// One poll cycle: stat, compare, and reload when the file changed.
    async fn poll(&mut self) {
        let Some(modified) = self.stat().await else {
            return;
        };

        let changed = match self.last_modified {
            Some(last) => modified > last,
            None => true,
        };
        if !changed {
            return;
        }

        tracing::info!(path = %self.path.display(), "Config file changed, reloading");

        // Let an in-progress write finish before reading.
        time::sleep(self.watch.debounce).await;

        // Re-stat so writes completing during the debounce window are not
        // detected again as a second change. Advances even when the reload
        // below fails; see the module docs.
        self.last_modified = self.stat().await.or(Some(modified));

        self.reload();
    }

    /// Read and decode the file, committing on success.
    fn reload(&self) {
        match load_config::<C>(&self.path) {
            Ok(config) => {
                self.store.set(config);
                metrics::record_reload(true);
                metrics::record_generation(self.store.generation());
                tracing::info!(
                    path = %self.path.display(),
                    generation = self.store.generation(),
                    "Config reloaded"
                );
            }
            Err(e) => {
                metrics::record_reload(false);
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Config reload failed, keeping current configuration"
                );
            }
        }
    }

    /// Modification time of the watched file, if it can be queried.
    async fn stat(&self) -> Option<SystemTime> {
        match fs::metadata(&self.path).await {
            Ok(meta) => match meta.modified() {
                Ok(modified) => Some(modified),
                Err(e) => {
                    tracing::debug!(path = %self.path.display(), error = %e, "No mtime available");
                    None
                }
            },
            Err(e) => {
                // File may be mid-replace or temporarily missing.
                tracing::debug!(path = %self.path.display(), error = %e, "Could not stat config file");
                None
            }
        }
    }
}
