//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService + UnitBuilder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! parsing or rendering itself. All of that lives behind ports.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FileOutcome, GenerateConfig, GenerateService, GenerateSummary, UnitBuilder, WriteStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InterfaceSource, UnitRenderer};

pub use error::ApplicationError;
