//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during structural extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source text could not be parsed as Rust
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<syn::Error> for ExtractError {
    fn from(e: syn::Error) -> Self {
        ExtractError::Parse(e.to_string())
    }
}
