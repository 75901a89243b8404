//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use crate::domain::{DomainUnit, InterfaceUnit, SourceFile};
use crate::error::SvcgenResult;
use std::path::Path;

/// Port for discovering service interfaces in a source tree.
///
/// Implemented by:
/// - `svcgen_adapters::extractor::GoInterfaceSource` (tree-sitter, production)
///
/// ## Design Notes
///
/// - Scans exactly one directory, non-recursively — the generated-server
///   convention keeps all `*_grpc.pb.go` files flat in the package directory
/// - Assumes input is syntactically valid; a file the parser rejects outright
///   fails the scan (run-aborting per the error taxonomy)
pub trait InterfaceSource: Send + Sync {
    /// Parse every qualifying file in `dir` and return its raw findings.
    ///
    /// Files are returned in deterministic (name-sorted) order.
    fn scan(&self, dir: &Path) -> SvcgenResult<Vec<SourceFile>>;
}

/// Port for rendering generation units into formatted source text.
///
/// Implemented by:
/// - `svcgen_adapters::renderer::GoUnitRenderer` (Tera + canonical formatting)
pub trait UnitRenderer: Send + Sync {
    /// Render a domain (adapter/handler) unit.
    fn render_domain(&self, unit: &DomainUnit) -> SvcgenResult<String>;

    /// Render an interface (sub-domain contract) unit.
    fn render_interface(&self, unit: &InterfaceUnit) -> SvcgenResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file, creating or truncating as needed.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file (overwrite gating).
    fn is_file(&self, path: &Path) -> bool;
}
