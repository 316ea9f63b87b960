//! Output units - the generated artifacts persisted by the writer

use std::fmt;

/// One generated artifact: a filename and its full textual content.
///
/// The filename is derived deterministically from the originating type's
/// name, so re-running the generator overwrites prior artifacts of the same
/// type rather than accumulating new ones. Created by the transform stage,
/// consumed (written to storage, then dropped) by the write stage.
///
/// # Examples
///
/// ```
/// use stubgen_domain::OutputUnit;
///
/// let unit = OutputUnit::new("FooTest.rs", "// generated");
/// assert_eq!(unit.filename, "FooTest.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// File name to persist under (relative to the destination directory)
    pub filename: String,

    /// Full artifact text
    pub content: String,
}

impl OutputUnit {
    /// Create an output unit.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.filename, self.content.len())
    }
}
