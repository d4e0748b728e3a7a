//! Archive record model

/// A named opaque payload destined for the archive.
///
/// The name is a relative path inside the snapshot (e.g. `config/metrics`);
/// the data is written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Logical archive location, relative to the snapshot root
    pub name: String,

    /// Raw payload bytes
    pub data: Vec<u8>,
}

impl Record {
    /// Create a record with the given name and payload.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create a record whose payload is a single diagnostic comment line.
    ///
    /// Used when a request fails: the failure is recorded as data so the
    /// archive stays self-describing even without metrics.
    pub fn comment(name: impl Into<String>, message: &str) -> Self {
        Self {
            name: name.into(),
            data: format!("# error: {}\n", message).into_bytes(),
        }
    }

    /// Whether this record holds an embedded diagnostic rather than data.
    pub fn is_comment(&self) -> bool {
        self.data.starts_with(b"# error:")
    }
}
