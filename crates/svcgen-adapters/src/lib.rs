//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod extractor;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use extractor::GoInterfaceSource;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::GoUnitRenderer;
