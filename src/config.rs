//! Service configuration
//!
//! A single JSON file supplies the bind address, the collection name, and
//! the store region. Every field has a default, and a missing file yields
//! the defaults wholesale, so a bare `rolodex start` works out of the box.
//! The region default honors `AWS_REGION` when the environment sets one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration load failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Named collection holding the user records (default: "users")
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Store region (default: `AWS_REGION` env var, else "us-west-2")
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_collection() -> String {
    "users".to_string()
}

fn default_region() -> String {
    std::env::var("AWS_REGION").unwrap_or_else(|_| "us-west-2".to_string())
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            collection: default_collection(),
            region: default_region(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file; an absent file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.collection, "users");
        assert!(!config.region.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig {
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = ServiceConfig::load(Path::new("/nonexistent/rolodex.json")).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 3000, "collection": "people"}}"#).unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.collection, "people");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
