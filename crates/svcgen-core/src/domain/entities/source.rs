//! Raw extraction results, straight off the syntax tree.
//!
//! These are what the [`InterfaceSource`] port hands the builder: per-file
//! interface findings with their type expressions still in shape form,
//! before naming and import resolution.
//!
//! [`InterfaceSource`]: crate::application::ports::InterfaceSource

use std::path::PathBuf;

use serde::Serialize;

/// The type-expression shapes the extractor recognizes.
///
/// Anything outside these shapes becomes [`TypeRef::Unsupported`] and is
/// dropped from the signature by the builder — a documented leniency, not an
/// error, but explicit here so tests can assert on it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    /// A dotted selector into another package: `pkg.Name`.
    Selector { package: String, name: String },
    /// A pointer to a bare identifier: `*Name`.
    ///
    /// The target is rewritten against the *enclosing file's package* when
    /// resolved — the convention assumes the pointed-to type is redeclared or
    /// re-exported locally. No cross-package type resolution is attempted.
    Pointer { name: String },
    /// A bare identifier, e.g. `error`.
    Ident { name: String },
    /// Any other shape (generics, maps, channels, anonymous structs, ...).
    Unsupported,
}

impl TypeRef {
    /// The identifier a display alias is derived from, if the shape has one.
    pub fn alias_source(&self) -> Option<&str> {
        match self {
            Self::Selector { name, .. } | Self::Pointer { name } | Self::Ident { name } => {
                Some(name)
            }
            Self::Unsupported => None,
        }
    }
}

/// One method of a discovered interface, parameters and results unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMethod {
    pub name: String,
    pub params: Vec<TypeRef>,
    pub results: Vec<TypeRef>,
}

/// A qualifying interface declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawInterface {
    /// Interface name as written in the source (suffix still attached).
    pub name: String,
    pub methods: Vec<RawMethod>,
}

/// Per-file extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Path of the parsed file.
    pub path: PathBuf,
    /// Package the file declares — pointer targets are rewritten against it.
    pub package: String,
    pub interfaces: Vec<RawInterface>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_source_for_named_shapes() {
        let selector = TypeRef::Selector {
            package: "context".into(),
            name: "Context".into(),
        };
        assert_eq!(selector.alias_source(), Some("Context"));
        assert_eq!(
            TypeRef::Pointer {
                name: "CreateRequest".into()
            }
            .alias_source(),
            Some("CreateRequest")
        );
        assert_eq!(
            TypeRef::Ident {
                name: "error".into()
            }
            .alias_source(),
            Some("error")
        );
    }

    #[test]
    fn unsupported_has_no_alias_source() {
        assert_eq!(TypeRef::Unsupported.alias_source(), None);
    }
}
