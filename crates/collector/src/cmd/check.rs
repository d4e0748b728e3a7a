//! `fedsnap check` - validate configuration without touching the network

use std::path::Path;

use anyhow::{Context, Result};

use fedsnap_config::Config;

/// Load, validate, and summarize the configuration.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    println!("config ok: {}", config_path.display());
    println!("  endpoint:         {}", config.endpoint.url);
    println!("  fixed series:     {}", config.gather.series.len());
    println!("  alerts series:    {}", config.gather.alerts_series);
    println!("  alert line limit: {}", config.gather.alert_line_limit);
    println!("  archive root:     {}", config.archive.path.display());
    Ok(())
}
