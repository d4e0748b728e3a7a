//! Line-limited reader adapter
//!
//! Wraps any byte source and forwards at most a fixed number of lines,
//! reporting end-of-stream once the limit is reached. The source is left
//! positioned at the first unforwarded byte so the remainder can still be
//! drained through [`LineLimitReader::into_remainder`].

use std::io::{self, Chain, Cursor, Read};

/// Reader adapter that forwards at most `limit` lines from its source.
///
/// A line is a run of bytes terminated by `\n`, or a final non-empty run
/// with no terminator. After `limit` complete lines have been forwarded,
/// `read` returns `Ok(0)` even if the source has more data; the unread
/// tail stays reachable via [`into_remainder`](Self::into_remainder).
///
/// Errors from the source propagate unchanged and do not disturb the line
/// count accumulated so far.
pub struct LineLimitReader<R> {
    inner: R,
    limit: u64,
    lines_read: u64,

    /// Bytes already consumed from the source but cut off by the limit.
    /// Re-attached in front of the source by `into_remainder`.
    carry: Vec<u8>,

    /// Forwarded bytes since the last newline (an unterminated tail).
    mid_line: bool,

    limit_reached: bool,
}

impl<R: Read> LineLimitReader<R> {
    /// Wrap `inner`, forwarding at most `limit` lines.
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            limit,
            lines_read: 0,
            carry: Vec::new(),
            mid_line: false,
            limit_reached: limit == 0,
        }
    }

    /// Number of complete lines forwarded so far.
    ///
    /// Final once the caller has drained this reader to end-of-stream:
    /// equal to the limit if the source was cut short, or to the source's
    /// true line count otherwise. A final unterminated run counts as one
    /// line iff non-empty.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Whether the line limit was reached.
    ///
    /// The remainder may still turn out to be empty; only draining it
    /// tells whether any data was actually discarded.
    pub fn is_truncated(&self) -> bool {
        self.limit_reached
    }

    /// Consume the reader and return everything it did not forward.
    ///
    /// The carry bytes (consumed from the source but cut off by the limit)
    /// come first, followed by the untouched rest of the source. Draining
    /// the result together with the forwarded bytes covers the original
    /// stream exactly once, so line totals stay exact.
    pub fn into_remainder(self) -> Chain<Cursor<Vec<u8>>, R> {
        Cursor::new(self.carry).chain(self.inner)
    }
}

impl<R: Read> Read for LineLimitReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.limit_reached || buf.is_empty() {
            return Ok(0);
        }

        let n = self.inner.read(buf)?;
        if n == 0 {
            // Genuine end of source: a non-empty unterminated tail is a line.
            if self.mid_line {
                self.lines_read += 1;
                self.mid_line = false;
            }
            return Ok(0);
        }

        let mut cut = n;
        for (i, &byte) in buf[..n].iter().enumerate() {
            if byte == b'\n' {
                self.lines_read += 1;
                self.mid_line = false;
                if self.lines_read == self.limit {
                    cut = i + 1;
                    self.limit_reached = true;
                    break;
                }
            } else {
                self.mid_line = true;
            }
        }

        if cut < n {
            self.carry.extend_from_slice(&buf[cut..n]);
        }
        Ok(cut)
    }
}

#[cfg(test)]
#[path = "limit_test.rs"]
mod limit_test;
