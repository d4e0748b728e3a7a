//! Snapshot writer

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use fedsnap_config::ArchiveConfig;
use fedsnap_gather::Record;

use crate::error::ArchiveError;

/// Timestamp format for snapshot directory names (UTC).
const SNAPSHOT_STAMP: &str = "%Y%m%d-%H%M%S";

/// Writes gather records into a timestamped snapshot directory.
pub struct ArchiveWriter {
    root: PathBuf,
    prefix: String,
}

impl ArchiveWriter {
    /// Create a writer for the configured archive root.
    pub fn new(config: &ArchiveConfig) -> Self {
        Self {
            root: config.path.clone(),
            prefix: config.prefix.clone(),
        }
    }

    /// Write one cycle's records and return the snapshot directory.
    ///
    /// Each record lands at its logical name below the snapshot directory,
    /// written to a `.partial` sibling first and renamed into place. Two
    /// cycles within the same second share a directory; records are
    /// replaced atomically.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or on a record name that is absolute or
    /// contains `..`.
    pub fn write_snapshot(&self, records: &[Record]) -> Result<PathBuf, ArchiveError> {
        let stamp = Utc::now().format(SNAPSHOT_STAMP);
        let dir = self.root.join(format!("{}-{}", self.prefix, stamp));
        fs::create_dir_all(&dir).map_err(|e| ArchiveError::io(dir.display().to_string(), e))?;

        for record in records {
            let path = resolve_record_path(&dir, &record.name)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ArchiveError::io(parent.display().to_string(), e))?;
            }

            let partial = partial_path(&path);
            fs::write(&partial, &record.data)
                .map_err(|e| ArchiveError::io(partial.display().to_string(), e))?;
            fs::rename(&partial, &path)
                .map_err(|e| ArchiveError::io(path.display().to_string(), e))?;

            debug!(
                record = %record.name,
                bytes = record.data.len(),
                "record written"
            );
        }

        info!(
            snapshot = %dir.display(),
            records = records.len(),
            "snapshot written"
        );
        Ok(dir)
    }
}

/// Resolve a record name below the snapshot directory, rejecting names
/// that would escape it.
fn resolve_record_path(dir: &Path, name: &str) -> Result<PathBuf, ArchiveError> {
    let relative = Path::new(name);
    let escapes = name.is_empty()
        || relative.is_absolute()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return Err(ArchiveError::InvalidRecordName(name.to_string()));
    }
    Ok(dir.join(relative))
}

/// Sibling path a record is staged at before the rename.
fn partial_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".partial");
    path.with_file_name(file_name)
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
