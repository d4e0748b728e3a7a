//! Archive output configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Archive output configuration
///
/// # Example
///
/// ```toml
/// [archive]
/// path = "/var/lib/fedsnap"
/// prefix = "fedsnap"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Root directory snapshots are written under
    /// Default: archive/
    pub path: PathBuf,

    /// Prefix for snapshot directory names
    /// Default: fedsnap
    pub prefix: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("archive"),
            prefix: "fedsnap".to_string(),
        }
    }
}

impl ArchiveConfig {
    /// Validate the archive section
    pub(crate) fn validate(&self) -> Result<()> {
        if self.prefix.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "archive",
                "prefix",
                "must not be empty",
            ));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(ConfigError::invalid_value(
                "archive",
                "prefix",
                "must not contain path separators",
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
        let config = ArchiveConfig::default();
        assert_eq!(config.path, PathBuf::from("archive"));
        assert_eq!(config.prefix, "fedsnap");
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
path = "/var/lib/fedsnap"
prefix = "metrics"
"#;
        let config: ArchiveConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.path, PathBuf::from("/var/lib/fedsnap"));
        assert_eq!(config.prefix, "metrics");
    }

    #[test]
    fn test_validate_rejects_separator_in_prefix() {
        let config = ArchiveConfig {
            prefix: "a/b".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
