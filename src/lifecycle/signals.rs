//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGTERM/SIGINT into a graceful shutdown
//! - Translate SIGHUP into a config reload, not a shutdown
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGHUP with no watched file is ignored with a debug log

use crate::config::ReloadHandle;
use crate::lifecycle::Shutdown;

/// Listen for OS signals until a termination signal arrives.
///
/// `reload` is `None` when no config file is being watched.
#[cfg(unix)]
pub async fn listen(shutdown: Shutdown, reload: Option<ReloadHandle>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGTERM handler");
            return;
        }
    };
    let mut sighup = match signal(SignalKind::hangup()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGHUP handler");
            return;
        }
    };

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("SIGINT received, shutting down");
                shutdown.trigger();
                break;
            }
            _ = sigterm.recv() => {
                tracing::info!("SIGTERM received, shutting down");
                shutdown.trigger();
                break;
            }
            _ = sighup.recv() => {
                match &reload {
                    Some(handle) => {
                        tracing::info!("SIGHUP received, reloading configuration");
                        handle.trigger();
                    }
                    None => tracing::debug!("SIGHUP received but no config file is watched"),
                }
            }
        }
    }
}

/// Listen for Ctrl+C until it arrives (non-Unix fallback; no reload signal).
#[cfg(not(unix))]
pub async fn listen(shutdown: Shutdown, _reload: Option<ReloadHandle>) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Ctrl+C received, shutting down");
        shutdown.trigger();
    }
}
