//! Stubgen Extractor
//!
//! The structural-extraction collaborator: turns raw Rust source text into
//! an ordered list of [`TypeDeclaration`]s, one per declared struct or enum,
//! each carrying the type's public inherent methods as its operations.
//!
//! # Overview
//!
//! The extractor owns all language-grammar concerns. The pipeline only sees
//! the [`StructuralExtractor`] trait from stubgen-domain, so any conforming
//! parser may be substituted for this one.
//!
//! # Example Usage
//!
//! ```
//! use stubgen_domain::traits::StructuralExtractor;
//! use stubgen_extractor::RustExtractor;
//!
//! let source = r#"
//!     pub struct Greeter;
//!     impl Greeter {
//!         pub fn hello(&self) {}
//!         fn internal(&self) {}
//!     }
//! "#;
//!
//! let decls = RustExtractor::new().extract(source).unwrap();
//! assert_eq!(decls.len(), 1);
//! assert_eq!(decls[0].name, "Greeter");
//! assert_eq!(decls[0].operations, vec!["hello"]);
//! ```
//!
//! [`TypeDeclaration`]: stubgen_domain::TypeDeclaration
//! [`StructuralExtractor`]: stubgen_domain::traits::StructuralExtractor

#![warn(missing_docs)]

mod error;
mod extractor;


pub use error::ExtractError;
pub use extractor::RustExtractor;
