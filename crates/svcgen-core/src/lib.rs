//! Svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GenerateService, UnitBuilder)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Source, Renderer, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     svcgen-adapters (Infrastructure)    │
//! │ (GoInterfaceSource, GoUnitRenderer, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Units, Signatures, Naming, Imports)   │
//! │         No I/O, No Parsers              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::{
//!     application::{GenerateConfig, GenerateService},
//! };
//!
//! // 1. Describe the run
//! let config = GenerateConfig::new("./gen/go/v1")
//!     .out_dir("handlers/v1")
//!     .sub_domain_out_dir("services");
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(source, renderer, filesystem);
//! let summary = service.generate(&config).unwrap();
//! println!("{} files written", summary.written);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateConfig, GenerateService, GenerateSummary,
        ports::{Filesystem, InterfaceSource, UnitRenderer},
    };
    pub use crate::domain::{
        DomainBody, DomainUnit, Import, ImportPathResolver, Injector, InterfaceUnit,
        MethodSignature, RawInterface, RawMethod, ServiceDescriptor, SourceFile, TypeRef,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
