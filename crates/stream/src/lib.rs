//! Fedsnap stream utilities - bounded line reading over `std::io::Read`.
//!
//! A federate response for a high-cardinality series can be arbitrarily
//! large. This crate caps what gets kept while still reporting how much
//! data was discarded, so a consumer of the bounded output knows it is
//! looking at a prefix.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────────┐     ┌───────────────┐
//! │  response  │────▶│ LineLimitReader │────▶│ caller buffer │
//! │ (Read)     │     │ (≤ N lines)     │     │ (kept bytes)  │
//! └────────────┘     └─────────────────┘     └───────────────┘
//!                            │ into_remainder()
//!                            ▼
//!                     ┌─────────────┐
//!                     │ count_lines │  (discarded bytes, counted only)
//!                     └─────────────┘
//! ```
//!
//! The two halves always account for the same stream exactly once:
//! `lines_read() + count_lines(into_remainder())` equals the total line
//! count of the source, for any input and any limit.
//!
//! # Example
//!
//! ```
//! use std::io::{Cursor, Read};
//! use fedsnap_stream::{count_lines, LineLimitReader};
//!
//! let source = Cursor::new(b"a\nb\nc\nd\n".to_vec());
//! let mut reader = LineLimitReader::new(source, 2);
//!
//! let mut kept = Vec::new();
//! reader.read_to_end(&mut kept).unwrap();
//! assert_eq!(kept, b"a\nb\n");
//! assert_eq!(reader.lines_read(), 2);
//!
//! let remaining = count_lines(reader.into_remainder()).unwrap();
//! assert_eq!(remaining, 2);
//! ```

mod count;
mod limit;

pub use count::count_lines;
pub use limit::LineLimitReader;
