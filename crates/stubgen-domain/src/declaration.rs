//! Type declarations - the structural units extracted from source text

/// A named type extracted from one source file, together with the ordered
/// list of its publicly visible operations.
///
/// Declarations are not unique globally: the same type name may appear in
/// several files, and each occurrence is transformed independently.
/// Operation names are unique within one declaration.
///
/// # Examples
///
/// ```
/// use stubgen_domain::TypeDeclaration;
///
/// let decl = TypeDeclaration::new("Foo", vec!["Bar".into(), "Baz".into()]);
/// assert_eq!(decl.name, "Foo");
/// assert_eq!(decl.operations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Name of the declared type
    pub name: String,

    /// Publicly visible operation names, in declaration order
    pub operations: Vec<String>,
}

impl TypeDeclaration {
    /// Create a declaration, deduplicating operation names while preserving
    /// first-occurrence order.
    pub fn new(name: impl Into<String>, operations: Vec<String>) -> Self {
        let mut seen = Vec::with_capacity(operations.len());
        for op in operations {
            if !seen.contains(&op) {
                seen.push(op);
            }
        }
        Self {
            name: name.into(),
            operations: seen,
        }
    }

    /// Whether this type declares no publicly visible operations.
    ///
    /// Such declarations still produce an (empty) artifact downstream;
    /// coverage of no-op types is intentional.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let decl = TypeDeclaration::new("Foo", vec!["b".into(), "a".into(), "c".into()]);
        assert_eq!(decl.operations, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_new_dedupes_keeping_first() {
        let decl = TypeDeclaration::new("Foo", vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(decl.operations, vec!["a", "b"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(TypeDeclaration::new("Foo", vec![]).is_empty());
        assert!(!TypeDeclaration::new("Foo", vec!["a".into()]).is_empty());
    }
}
