//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//!     SIGHUP → trigger config reload
//!
//! Shutdown (shutdown.rs):
//!     broadcast to subscribers → watcher and HTTP server exit their loops
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
