//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read (missing, permissions, transient I/O).
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON or does not match the schema.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the file at `path` and decode it as a JSON configuration.
///
/// This is the single load path: the synchronous startup load and every
/// background reload go through it. It has no side effects; committing the
/// result is the caller's decision.
pub fn load_config<C: DeserializeOwned>(path: &Path) -> Result<C, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ServiceConfig;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"service": {{"name": "idp"}}}}"#).unwrap();

        let config: ServiceConfig = load_config(file.path()).unwrap();
        assert_eq!(config.service.name, "idp");
        // Unspecified sections fall back to defaults.
        assert_eq!(config.limits.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config::<ServiceConfig>(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_truncated_json_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"service": {{"name":"#).unwrap();

        let err = load_config::<ServiceConfig>(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }
}
