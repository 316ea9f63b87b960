//! Aggregate result of one pipeline run

use std::fmt;

/// The pipeline stage an item failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Listing the source directory after it was opened
    Enumerate,
    /// Reading a source file
    Read,
    /// Extracting declarations and synthesizing artifacts
    Generate,
    /// Persisting an artifact
    Write,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Enumerate => write!(f, "enumerate"),
            StageKind::Read => write!(f, "read"),
            StageKind::Generate => write!(f, "generate"),
            StageKind::Write => write!(f, "write"),
        }
    }
}

/// One item-scoped failure
///
/// A failed item never aborts the run; it is dropped and recorded here.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    /// Stage the failure occurred in
    pub stage: StageKind,

    /// The item concerned: a directory entry or the source directory for
    /// enumerate failures, a source path for read/generate failures, an
    /// artifact filename for write failures
    pub subject: String,

    /// Human-readable reason
    pub reason: String,
}

impl ItemFailure {
    /// Create an item failure record
    pub fn new(stage: StageKind, subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            stage,
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.subject, self.reason)
    }
}

/// Totals and itemized failures for one completed run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Paths the enumerator produced
    pub files_enumerated: usize,

    /// Files read successfully
    pub files_read: usize,

    /// Artifacts synthesized by the transform stage
    pub units_generated: usize,

    /// Artifacts persisted successfully
    pub units_written: usize,

    /// Every item-scoped failure, in no particular order
    pub failures: Vec<ItemFailure>,
}

impl RunReport {
    /// Whether the run completed without any item failure
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failures in a given stage
    pub fn failures_in(&self, stage: StageKind) -> usize {
        self.failures.iter().filter(|f| f.stage == stage).count()
    }

    /// Generate a summary report of the run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Stubgen Run Summary".to_string(),
            "===================".to_string(),
            format!("Files enumerated: {}", self.files_enumerated),
            format!("Files read:       {}", self.files_read),
            format!("Stubs generated:  {}", self.units_generated),
            format!("Stubs written:    {}", self.units_written),
        ];

        if !self.failures.is_empty() {
            lines.push(String::new());
            lines.push(format!("Failures ({}):", self.failures.len()));
            for failure in &self.failures {
                lines.push(format!("  {}", failure));
            }
        }

        lines.join("\n")
    }
}
