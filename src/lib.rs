//! Live-reloadable configuration for a long-running service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use config::store::ConfigStore;
pub use config::watcher::{ConfigWatcher, ReloadHandle, WatchConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
