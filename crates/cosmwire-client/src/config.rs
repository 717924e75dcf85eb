//! Configuration management for the cosmwire client

use cosmwire_errors::{codes, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("io error:: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("toml parsing error:: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("toml serialization error:: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl ErrorCode for ConfigError {
    fn codespace(&self) -> &'static str {
        "config"
    }

    fn code(&self) -> u32 {
        codes::CONFIG
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Node RPC endpoint
    pub rpc_endpoint: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Query height; latest when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_endpoint: "http://localhost:26657".to_string(),
            timeout_seconds: 30,
            height: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get default configuration directory
    pub fn default_config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".cosmwire")
        } else {
            PathBuf::from(".cosmwire")
        }
    }

    /// Get default configuration file path
    pub fn default_config_file() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Load configuration from default location or create default
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_file();

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.rpc_endpoint, "http://localhost:26657");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.height, None);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let original_config = ClientConfig {
            rpc_endpoint: "http://localhost:8080".to_string(),
            timeout_seconds: 60,
            height: Some(1024),
        };

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = ClientConfig::load_from_file(&config_path).unwrap();

        assert_eq!(loaded_config, original_config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "rpc_endpoint = \"http://node:26657\"\n").unwrap();

        let config = ClientConfig::load_from_file(&config_path).unwrap();

        assert_eq!(config.rpc_endpoint, "http://node:26657");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.height, None);
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "timeout_seconds = \"soon\"").unwrap();

        let err = ClientConfig::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert_eq!(err.code(), codes::CONFIG);
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::load_from_file("/nonexistent/cosmwire/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
