//! Stubgen Domain Layer
//!
//! This crate contains the core value types and trait seams for stubgen.
//! It has no external dependencies and defines the records that flow through
//! the generation pipeline plus the interfaces of the two substitutable
//! collaborators (structural extraction and artifact formatting).
//!
//! ## Key Concepts
//!
//! - **SourceContent**: the full text of one source file, tagged with its path
//! - **TypeDeclaration**: a named type and its publicly visible operations
//! - **OutputUnit**: one generated artifact (filename + content)
//!
//! ## Architecture
//!
//! Every record is an immutable value moved by ownership from stage to stage;
//! no stage retains a reference after handing an item downstream.
//! Infrastructure implementations (the syn-based extractor, the stub
//! formatter, the pipeline itself) live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod content;
pub mod declaration;
pub mod traits;

// Re-exports for convenience
pub use artifact::OutputUnit;
pub use content::SourceContent;
pub use declaration::TypeDeclaration;
