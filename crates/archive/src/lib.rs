//! Fedsnap - Archive
//!
//! Takes the records produced by a gather cycle and lands them on disk.
//!
//! # Directory Structure
//!
//! Each cycle gets its own UTC-timestamped directory under the configured
//! root, with one file per record at its logical name:
//!
//! ```text
//! archive/
//! └── fedsnap-20250115-103045/
//!     └── config/
//!         └── metrics
//! ```
//!
//! Records are written to a `.partial` file and renamed into place, so a
//! crashed run never leaves a torn record visible under its final name.

mod error;
mod writer;

pub use error::ArchiveError;
pub use writer::ArchiveWriter;
