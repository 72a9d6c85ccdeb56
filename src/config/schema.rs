//! Configuration schema for the host service.
//!
//! The reload machinery in this subsystem is generic; only the host binary
//! and its HTTP surface depend on the concrete shape below. All fields have
//! defaults so a minimal file (or `{}`) is accepted.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service identity.
    pub service: ServiceInfo,

    /// Request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Service identity, reported on the health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceInfo {
    /// Human-readable service name.
    pub name: String,

    /// Deployment environment label (e.g., "development", "production").
    pub environment: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: "config-reload".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Request limits applied by the HTTP surface.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: ServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service.name, "config-reload");
        assert_eq!(config.limits.request_timeout_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_section_keeps_sibling_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"limits": {"request_timeout_secs": 5}}"#).unwrap();
        assert_eq!(config.limits.request_timeout_secs, 5);
        assert_eq!(config.limits.max_body_bytes, 1024 * 1024);
    }
}
