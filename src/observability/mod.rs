//! Observability subsystem.
//!
//! Structured logging goes through `tracing` (subscriber initialized by the
//! binary); this module owns the metrics exporter and recorders.
//!
//! # Metrics
//! - `config_reloads_total` (counter): successful background reloads
//! - `config_reload_errors_total` (counter): reload attempts that failed
//! - `config_generation` (gauge): generation of the committed snapshot

pub mod metrics;
