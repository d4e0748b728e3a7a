//! `fedsnap gather` - run one gather cycle and archive the snapshot

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use fedsnap_archive::ArchiveWriter;
use fedsnap_config::Config;
use fedsnap_gather::gather_most_recent;

/// Run one gather cycle.
///
/// An empty record set (the client could not even be built) is a clean
/// exit: metrics are best-effort and the skip was already logged.
pub fn run(config_path: &Path, log_override: Option<&str>) -> Result<()> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    crate::init_logging(log_override.unwrap_or(config.log.level.as_str()))?;

    info!(
        endpoint = %config.endpoint.url,
        series = config.gather.series.len(),
        limit = config.gather.alert_line_limit,
        "starting gather cycle"
    );

    let records = gather_most_recent(&config.endpoint, &config.gather)?;
    if records.is_empty() {
        info!("no metrics gathered, nothing to archive");
        return Ok(());
    }

    let writer = ArchiveWriter::new(&config.archive);
    let snapshot = writer.write_snapshot(&records)?;

    info!(
        snapshot = %snapshot.display(),
        records = records.len(),
        "gather cycle complete"
    );
    Ok(())
}
