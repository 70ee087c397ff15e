//! Configuration model

use crate::error::{MemdashError, MemdashResult};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend endpoint settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> MemdashResult<()> {
        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            return Err(MemdashError::config("Backend base URL must not be empty"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(MemdashError::config(format!(
                "Backend base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        if self.backend.request_timeout_secs == 0 {
            return Err(MemdashError::config(
                "Request timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the memory backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether log lines go to the console at all
    #[serde(default = "default_log_to_console")]
    pub log_to_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_console: default_log_to_console(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

// Default keeps request logs from interleaving with the rendered dashboard
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_to_console() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.backend.connect_timeout_secs, 10);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.log_to_console);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = Config::default();
        config.backend.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_schemeless_url() {
        let mut config = Config::default();
        config.backend.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.backend.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "backend": { "base_url": "http://mem:9000" } }"#).unwrap();
        assert_eq!(config.backend.base_url, "http://mem:9000");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "warn");
    }
}
