//! Gather configuration
//!
//! Which series to pull from the federate endpoint and how much of the
//! high-cardinality alerts series to keep.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Maximal number of alert lines kept per snapshot.
///
/// 500 KiB of alerts is the budget; one alert line is typically ~450
/// bytes, which works out to ~1137 lines, rounded down to 1000.
pub const DEFAULT_ALERT_LINE_LIMIT: u64 = 1000;

/// Default fixed series pulled in the bounded (non-streaming) request.
pub const DEFAULT_SERIES: &[&str] = &[
    "etcd_object_counts",
    "cluster_installer",
    "namespace:container_cpu_usage_seconds_total:sum_rate",
    "namespace:container_memory_usage_bytes:sum",
    "virt_platform",
];

/// Gather configuration
///
/// # Example
///
/// ```toml
/// [gather]
/// series = ["cluster_installer", "virt_platform"]
/// alerts_series = "ALERTS"
/// alert_line_limit = 1000
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatherConfig {
    /// Named series fetched fully in one request
    /// Default: the standard cluster series set
    pub series: Vec<String>,

    /// High-cardinality series consumed as a stream and truncated
    /// Default: ALERTS
    pub alerts_series: String,

    /// Maximum alert lines kept; everything past it is only counted
    /// Default: 1000
    pub alert_line_limit: u64,
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self {
            series: DEFAULT_SERIES.iter().map(|s| s.to_string()).collect(),
            alerts_series: "ALERTS".to_string(),
            alert_line_limit: DEFAULT_ALERT_LINE_LIMIT,
        }
    }
}

impl GatherConfig {
    /// Validate the gather section
    pub(crate) fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(ConfigError::NoSeries);
        }
        if self.series.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::invalid_value(
                "gather",
                "series",
                "series names must not be empty",
            ));
        }
        if self.alerts_series.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "gather",
                "alerts_series",
                "must not be empty",
            ));
        }
        if self.alert_line_limit == 0 {
            return Err(ConfigError::invalid_value(
                "gather",
                "alert_line_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
