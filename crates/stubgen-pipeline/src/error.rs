//! Error types for the pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors
///
/// Per-item failures are not errors at this level: they are collected into
/// the run's [`RunReport`](crate::RunReport) instead. A `PipelineError`
/// means the run as a whole could not proceed and nothing was written.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source directory missing or inaccessible
    #[error("Invalid input: cannot read source directory {path}: {source}")]
    InvalidInput {
        /// The configured source directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stage supervisor task panicked
    #[error("Stage task failed: {0}")]
    StageFailed(String),
}
