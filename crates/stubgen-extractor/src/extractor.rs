//! Core syn-based extractor implementation

use crate::error::ExtractError;
use std::collections::HashMap;
use stubgen_domain::traits::StructuralExtractor;
use stubgen_domain::TypeDeclaration;
use syn::{ImplItem, Item, Type, Visibility};
use tracing::debug;

/// Extracts type declarations from Rust source text.
///
/// A declaration is produced for every `struct` and `enum` item, in
/// declaration order, including items nested in inline modules. The
/// declaration's operations are the `pub` methods of the inherent
/// (non-trait) `impl` blocks for that type within the same module scope,
/// in declaration order. Trait impls and non-`pub` methods are excluded,
/// and a type with no public methods still yields a declaration with an
/// empty operation list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustExtractor;

impl RustExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl StructuralExtractor for RustExtractor {
    type Error = ExtractError;

    fn extract(&self, text: &str) -> Result<Vec<TypeDeclaration>, Self::Error> {
        let file = syn::parse_file(text)?;

        let mut declarations = Vec::new();
        collect_scope(&file.items, &mut declarations);

        debug!("Extracted {} type declarations", declarations.len());

        Ok(declarations)
    }
}

/// Collect the declarations of one module scope, then recurse into its
/// inline modules. Methods are matched to types within the same scope, so
/// equally named types in sibling modules keep their own operations.
fn collect_scope(items: &[Item], declarations: &mut Vec<TypeDeclaration>) {
    let mut types = Vec::new();
    let mut methods: HashMap<String, Vec<String>> = HashMap::new();

    for item in items {
        match item {
            Item::Struct(s) => types.push(s.ident.to_string()),
            Item::Enum(e) => types.push(e.ident.to_string()),
            Item::Impl(imp) if imp.trait_.is_none() => {
                if let Some(name) = self_type_name(&imp.self_ty) {
                    for impl_item in &imp.items {
                        if let ImplItem::Fn(f) = impl_item {
                            if matches!(f.vis, Visibility::Public(_)) {
                                methods
                                    .entry(name.clone())
                                    .or_default()
                                    .push(f.sig.ident.to_string());
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    for name in types {
        let ops = methods.remove(&name).unwrap_or_default();
        declarations.push(TypeDeclaration::new(name, ops));
    }

    for item in items {
        if let Item::Mod(m) = item {
            if let Some((_, nested)) = &m.content {
                collect_scope(nested, declarations);
            }
        }
    }
}

/// Resolve the simple name of an impl block's self type, if it has one.
fn self_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(p) => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}
