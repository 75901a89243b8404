//! Generation units — the intermediate representation handed to the renderer.
//!
//! Each discovered source file yields one [`DomainUnit`] (the adapter that
//! wires an injected sub-domain implementation to the generated interface)
//! and one [`InterfaceUnit`] (the sub-domain contract the adapter depends
//! on). Units are immutable once built and consumed exactly once.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::signature::ServiceDescriptor;

/// A single import line of a generated file.
///
/// Path uniqueness is deliberately not enforced here — duplicates are a known
/// artifact the canonical formatting pass compacts away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    /// Optional short alias (`svc "acme/services"`).
    pub alias: Option<String>,
    pub path: String,
}

impl Import {
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }
}

/// The sub-domain dependency a domain adapter holds and delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Injector {
    /// Contract type name, `<Service><SubDomainLabel>`.
    pub name: String,
    /// Field/parameter alias, `lower_first(name)`.
    pub alias: String,
    /// Import alias of the package the contract lives in.
    pub package: String,
}

/// One service body of a domain unit: the contract plus its injector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainBody {
    pub service: ServiceDescriptor,
    pub injector: Injector,
}

/// The adapter/handler generation unit for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainUnit {
    /// Target path the rendered file is written to.
    pub file_name: PathBuf,
    /// Package the generated file declares.
    pub package: String,
    /// Domain label appended to generated type names (default "Handler").
    pub label: String,
    pub imports: Vec<Import>,
    pub bodies: Vec<DomainBody>,
}

/// The sub-domain contract generation unit for one source file.
///
/// Across files, interface units are merged into a mapping keyed by service
/// name; a later file whose service name collides with an earlier one
/// replaces it (last-write-wins — a documented merge policy, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceUnit {
    pub file_name: PathBuf,
    pub package: String,
    /// Sub-domain label appended to contract names (default "Service").
    pub label: String,
    pub imports: Vec<Import>,
    pub bodies: Vec<ServiceDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_import_has_no_alias() {
        let import = Import::plain("context");
        assert_eq!(import.alias, None);
        assert_eq!(import.path, "context");
    }

    #[test]
    fn aliased_import_keeps_both_parts() {
        let import = Import::aliased("svc", "github.com/acme/widget/services");
        assert_eq!(import.alias.as_deref(), Some("svc"));
        assert_eq!(import.path, "github.com/acme/widget/services");
    }
}
