//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → ConfigStore (atomic swap of Arc snapshot)
//!     → read by any request context via store.get()
//!
//! In the background:
//!     watcher.rs polls the file's mtime
//!     → change detected → debounce → loader.rs reloads
//!     → success: commit new snapshot into ConfigStore
//!     → failure: previous snapshot stays active, error logged
//! ```
//!
//! # Design Decisions
//! - A snapshot is immutable once committed; a reload always produces a
//!   whole new value, never a field-level mutation
//! - Decode is fallible, commit is not: a snapshot only reaches the store
//!   after deserialization succeeded
//! - The store, loader and watcher are generic over the config type; the
//!   concrete schema lives in schema.rs and belongs to the host

pub mod bootstrap;
pub mod loader;
pub mod schema;
pub mod store;
pub mod watcher;

pub use bootstrap::init;
pub use loader::{load_config, ConfigError};
pub use schema::ServiceConfig;
pub use store::ConfigStore;
pub use watcher::{ConfigWatcher, ReloadHandle, WatchConfig};
