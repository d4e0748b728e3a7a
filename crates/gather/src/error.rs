//! Error types for the gather cycle

use std::io;
use thiserror::Error;

/// Errors that can occur while gathering a metrics snapshot
///
/// Request-level failures never show up here - they are embedded into the
/// output record as `# error:` comment lines instead.
#[derive(Debug, Error)]
pub enum GatherError {
    /// Failed to initialize the metrics client (e.g., TLS or proxy
    /// misconfiguration). Callers treat this as "skip the cycle".
    #[error("failed to initialize metrics client: {0}")]
    Init(String),

    /// Read failure on a stream already in flight; the truncation count
    /// for this cycle cannot be trusted.
    #[error("failed to read alerts stream: {0}")]
    Read(#[from] io::Error),
}
