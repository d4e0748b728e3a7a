//! Fedsnap - Gather
//!
//! Pulls a point-in-time snapshot of federated metrics from a monitoring
//! endpoint and turns it into archive [`Record`]s.
//!
//! Two GET requests go against the endpoint's `/federate` path:
//!
//! 1. A bounded request for a small fixed set of named series, read fully.
//! 2. A streaming request for the high-cardinality alerts series, capped at
//!    a configured number of lines. Everything past the cap is drained and
//!    counted but never kept, and the record carries a
//!    `# ALERTS <total>/<limit>` annotation so readers know the payload is
//!    a prefix.
//!
//! # Failure policy
//!
//! Metrics are best-effort. A client that cannot even be built means the
//! cycle is skipped with a warning and no records. A failed request is
//! written into the record itself as a `# error: ...` comment line, keeping
//! partial archives self-describing. Only a read error on a stream already
//! in flight aborts the cycle, because a half-read stream cannot produce a
//! trustworthy truncation count.
//!
//! # Example
//!
//! ```no_run
//! use fedsnap_config::Config;
//! use fedsnap_gather::gather_most_recent;
//!
//! let config = Config::default();
//! let records = gather_most_recent(&config.endpoint, &config.gather)?;
//! for record in &records {
//!     println!("{}: {} bytes", record.name, record.data.len());
//! }
//! # Ok::<(), fedsnap_gather::GatherError>(())
//! ```

mod error;
mod federate;
mod record;

pub use error::GatherError;
pub use federate::{gather_most_recent, MetricsGatherer, METRICS_RECORD_NAME};
pub use record::Record;
