//! Metrics collection and exposition.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and serve the scrape endpoint on `addr`.
///
/// Failure to install is logged and otherwise ignored: the service runs
/// without metrics rather than refusing to start.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            metrics::describe_counter!(
                "config_reloads_total",
                "Number of successful configuration reloads"
            );
            metrics::describe_counter!(
                "config_reload_errors_total",
                "Number of failed configuration reload attempts"
            );
            metrics::describe_gauge!(
                "config_generation",
                "Generation of the currently committed configuration snapshot"
            );
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record the outcome of a configuration reload attempt.
pub fn record_reload(success: bool) {
    if success {
        metrics::counter!("config_reloads_total").increment(1);
    } else {
        metrics::counter!("config_reload_errors_total").increment(1);
    }
}

/// Record the generation of the committed snapshot.
pub fn record_generation(generation: u64) {
    metrics::gauge!("config_generation").set(generation as f64);
}
