//! Resolved method signatures, ready for rendering.

use serde::Serialize;

/// A resolved parameter or return value: display alias + rendered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Short display name derived via the naming resolver (`ctx`, `req`, ...).
    pub alias: String,
    /// Rendered type reference: bare identifier, `pkg.Name`, or `*pkg.Name`.
    #[serde(rename = "type")]
    pub ty: String,
}

impl Binding {
    pub fn new(alias: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ty: ty.into(),
        }
    }
}

/// One method of a service contract.
///
/// Invariant: `name` is non-empty; the builder never emits a signature for
/// the embedding-marker method reserved by the interface convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub args: Vec<Binding>,
    pub returns: Vec<Binding>,
}

/// A discovered service: derived name plus its ordered method list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    /// Service name with the interface-convention suffix stripped
    /// (`WidgetServiceServer` → `Widget`).
    pub name: String,
    pub methods: Vec<MethodSignature>,
}
