//! Drain-and-count for the unforwarded tail of a stream

use std::io::{self, ErrorKind, Read};

/// Scratch buffer size for counting; bytes are discarded after each scan.
const SCRATCH_LEN: usize = 8 * 1024;

/// Count the lines remaining in `reader`, consuming it fully.
///
/// Counts one per newline byte plus one for a final non-empty run with no
/// terminator. Memory use is fixed regardless of stream length: bytes are
/// scanned in place and dropped, the only state carried between chunks is
/// the running count and whether the previous chunk ended mid-line.
///
/// On a source error the count accumulated so far is lost with the error;
/// a partial count is not trustworthy and must not be reported.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut scratch = [0u8; SCRATCH_LEN];
    let mut count = 0u64;
    let mut mid_line = false;

    loop {
        let n = match reader.read(&mut scratch) {
            Ok(0) => {
                if mid_line {
                    count += 1;
                }
                return Ok(count);
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for &byte in &scratch[..n] {
            if byte == b'\n' {
                count += 1;
                mid_line = false;
            } else {
                mid_line = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "count_test.rs"]
mod count_test;
