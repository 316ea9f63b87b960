//! Stub test file rendering

use std::fmt::Write;
use stubgen_domain::traits::ArtifactFormatter;
use stubgen_domain::{OutputUnit, TypeDeclaration};

/// Suffix appended to the type name (container) and to each operation name
/// (routine). `Foo` becomes module `FooTest` in file `FooTest.rs`.
const TEST_SUFFIX: &str = "Test";

/// File extension of generated artifacts.
const FILE_EXTENSION: &str = ".rs";

/// Marker carried by every generated assertion.
const MARKER: &str = "autogenerated";

/// Renders stub test files for type declarations.
///
/// The container is a `#[cfg(test)]` module named `<TypeName>Test` holding
/// one `#[test]` routine `<OpName>Test` per operation, each a single
/// unconditional failing assertion. Generated names keep the `<Name>Test`
/// convention, so the file opens with `#![allow(non_snake_case)]`.
///
/// Rendering is deterministic: the same declaration always produces
/// byte-identical output, which is what makes re-runs overwrite cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubFormatter;

impl StubFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactFormatter for StubFormatter {
    fn format(&self, declaration: &TypeDeclaration) -> OutputUnit {
        let container = format!("{}{}", declaration.name, TEST_SUFFIX);
        let filename = format!("{}{}", container, FILE_EXTENSION);

        let mut content = String::new();
        let _ = writeln!(content, "//! Generated test skeleton for `{}`.", declaration.name);
        content.push_str("#![allow(non_snake_case)]\n\n");
        content.push_str("#[cfg(test)]\n");

        if declaration.operations.is_empty() {
            // A no-op type still gets its (empty) container.
            let _ = writeln!(content, "mod {} {{}}", container);
        } else {
            let _ = writeln!(content, "mod {} {{", container);
            for (idx, operation) in declaration.operations.iter().enumerate() {
                if idx > 0 {
                    content.push('\n');
                }
                content.push_str("    #[test]\n");
                let _ = writeln!(content, "    fn {}{}() {{", operation, TEST_SUFFIX);
                let _ = writeln!(content, "        assert!(false, \"{}\");", MARKER);
                content.push_str("    }\n");
            }
            content.push_str("}\n");
        }

        OutputUnit::new(filename, content)
    }
}
