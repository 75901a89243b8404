//! Core domain layer for svcgen.
//!
//! This module contains pure business logic with ZERO I/O.
//! All parsing, templating, and filesystem concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Generation units are built once and never mutated
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod module_path;
pub mod naming;

// Re-exports for convenience
pub use entities::{
    signature::{Binding, MethodSignature, ServiceDescriptor},
    source::{RawInterface, RawMethod, SourceFile, TypeRef},
    units::{DomainBody, DomainUnit, Import, Injector, InterfaceUnit},
};

pub use error::{DomainError, ErrorCategory};

pub use module_path::ImportPathResolver;
