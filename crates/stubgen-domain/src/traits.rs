//! Trait definitions for the substitutable collaborators
//!
//! These traits define the boundary between the pipeline and the two
//! language-specific collaborators. Implementations live in other crates
//! (stubgen-extractor, stubgen-synthesizer); any conforming implementation
//! may be substituted, which is also how the pipeline tests inject
//! instrumented doubles.

use crate::{OutputUnit, TypeDeclaration};

/// Trait for extracting type declarations from raw source text
///
/// Implemented by the infrastructure layer (stubgen-extractor)
pub trait StructuralExtractor {
    /// Error type for extraction failures (malformed input)
    type Error: std::fmt::Display;

    /// Extract the ordered list of declared types from source text.
    ///
    /// Returns one declaration per discovered type, each carrying only its
    /// publicly visible operations. A file with no type declarations yields
    /// an empty list, which is not an error.
    fn extract(&self, text: &str) -> Result<Vec<TypeDeclaration>, Self::Error>;
}

/// Trait for rendering one artifact per type declaration
///
/// Implemented by the infrastructure layer (stubgen-synthesizer)
pub trait ArtifactFormatter {
    /// Render the companion artifact for one declaration.
    ///
    /// Pure templating: the same declaration must always render the same
    /// bytes, and a declaration with zero operations still yields an
    /// artifact with an empty container.
    fn format(&self, declaration: &TypeDeclaration) -> OutputUnit;
}
