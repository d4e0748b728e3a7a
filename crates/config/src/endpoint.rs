//! Monitoring endpoint configuration
//!
//! Where the federated metrics live and how to reach them.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Monitoring endpoint configuration
///
/// # Example
///
/// ```toml
/// [endpoint]
/// url = "https://prometheus.example:9091"
/// token = "sha256~..."
/// timeout = "30s"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the monitoring endpoint; `/federate` is appended
    /// Default: http://localhost:9090
    pub url: String,

    /// Optional bearer token for authentication
    /// Default: none
    pub token: Option<String>,

    /// Whole-transfer timeout, applied when the HTTP client is built.
    /// Individual reads carry no timeout of their own.
    /// Default: 30s
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9090".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl EndpointConfig {
    /// Validate the endpoint section
    pub(crate) fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "endpoint",
                "url",
                "must not be empty",
            ));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::invalid_value(
                "endpoint",
                "url",
                format!("expected an http(s) URL, got '{}'", self.url),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EndpointConfig::default();
        assert_eq!(config.url, "http://localhost:9090");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_deserialize_empty() {
        let config: EndpointConfig = toml::from_str("").unwrap();
        assert_eq!(config.url, "http://localhost:9090");
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
url = "https://prometheus.example:9091"
token = "sha256~abc"
timeout = "5s"
"#;
        let config: EndpointConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url, "https://prometheus.example:9091");
        assert_eq!(config.token.as_deref(), Some("sha256~abc"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = EndpointConfig {
            url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = EndpointConfig {
            url: "ftp://metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_https() {
        let config = EndpointConfig {
            url: "https://metrics:9091".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
