//! Error types for archive writing

use std::io;
use thiserror::Error;

/// Errors that can occur while writing a snapshot
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Record name would land outside the snapshot directory
    #[error("record name '{0}' escapes the snapshot directory")]
    InvalidRecordName(String),

    /// Filesystem failure underneath the snapshot root
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path being written
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

impl ArchiveError {
    /// Create an Io error with path context
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
