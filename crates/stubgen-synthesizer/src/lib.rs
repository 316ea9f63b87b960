//! Stubgen Synthesizer
//!
//! The artifact-formatting collaborator: renders one stub test file per
//! [`TypeDeclaration`]. Pure templating over two inputs (type name,
//! operation names), with no pipeline concerns and no I/O.
//!
//! Every generated routine fails unconditionally until a developer fills it
//! in. That is the product's point: unimplemented coverage stays visible in
//! every test run instead of silently passing.
//!
//! # Example Usage
//!
//! ```
//! use stubgen_domain::traits::ArtifactFormatter;
//! use stubgen_domain::TypeDeclaration;
//! use stubgen_synthesizer::StubFormatter;
//!
//! let decl = TypeDeclaration::new("Foo", vec!["Bar".into()]);
//! let unit = StubFormatter::new().format(&decl);
//!
//! assert_eq!(unit.filename, "FooTest.rs");
//! assert!(unit.content.contains("fn BarTest()"));
//! ```
//!
//! [`TypeDeclaration`]: stubgen_domain::TypeDeclaration

#![warn(missing_docs)]

mod formatter;

pub use formatter::StubFormatter;
