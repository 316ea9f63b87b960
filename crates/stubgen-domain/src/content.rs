//! Source content - the text of one file between the read and transform stages

use std::path::PathBuf;

/// The full textual content of one source file.
///
/// Ephemeral: owned solely by the stage processing it and discarded once the
/// transformer has consumed it. The path is carried for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContent {
    /// Path the text was read from (diagnostics only)
    pub path: PathBuf,

    /// Full file text
    pub text: String,
}

impl SourceContent {
    /// Create source content for a file.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}
