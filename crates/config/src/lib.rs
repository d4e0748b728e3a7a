//! Fedsnap Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! A minimal (or empty) config should just work - only specify what you
//! need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use fedsnap_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[endpoint]\nurl = \"http://thanos:9091\"").unwrap();
//! assert_eq!(config.endpoint.url, "http://thanos:9091");
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [endpoint]
//! url = "https://prometheus.example:9091"
//! token = "sha256~..."
//! timeout = "30s"
//!
//! [gather]
//! series = ["cluster_installer", "virt_platform"]
//! alerts_series = "ALERTS"
//! alert_line_limit = 1000
//!
//! [archive]
//! path = "/var/lib/fedsnap"
//!
//! [log]
//! level = "info"
//! ```

mod archive;
mod endpoint;
mod error;
mod gather;
mod logging;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use archive::ArchiveConfig;
pub use endpoint::EndpointConfig;
pub use error::{ConfigError, Result};
pub use gather::{GatherConfig, DEFAULT_ALERT_LINE_LIMIT, DEFAULT_SERIES};
pub use logging::{LogConfig, LogLevel};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monitoring endpoint to pull from
    pub endpoint: EndpointConfig,

    /// What to gather and how much to keep
    pub gather: GatherConfig,

    /// Where snapshots land on disk
    pub archive: ArchiveConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, contains invalid TOML,
    /// or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_str(&contents)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.endpoint.validate()?;
        self.gather.validate()?;
        self.archive.validate()?;
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.endpoint.url, "http://localhost:9090");
        assert_eq!(config.gather.alert_line_limit, DEFAULT_ALERT_LINE_LIMIT);
        assert_eq!(config.archive.prefix, "fedsnap");
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_full_config_parses() {
        let toml = r#"
[endpoint]
url = "https://prometheus.example:9091"
token = "sha256~abc"
timeout = "10s"

[gather]
series = ["up"]
alerts_series = "ALERTS"
alert_line_limit = 200

[archive]
path = "/tmp/snapshots"
prefix = "metrics"

[log]
level = "debug"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.endpoint.url, "https://prometheus.example:9091");
        assert_eq!(config.gather.series, vec!["up"]);
        assert_eq!(config.gather.alert_line_limit, 200);
        assert_eq!(config.archive.prefix, "metrics");
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_section_value_fails_parse() {
        let err = Config::from_str("[gather]\nalert_line_limit = 0").unwrap_err();
        assert!(err.to_string().contains("alert_line_limit"));
    }

    #[test]
    fn test_unparseable_toml_fails() {
        assert!(matches!(
            Config::from_str("endpoint = ["),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Config::from_file("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
