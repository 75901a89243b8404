//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An input or output directory could not be resolved to an absolute path.
    #[error("cannot resolve path {path}: {reason}")]
    PathResolution { path: PathBuf, reason: String },

    /// The source directory could not be scanned at all.
    #[error("cannot scan source directory {path}: {reason}")]
    SourceScan { path: PathBuf, reason: String },

    /// A source file could not be parsed into a syntax tree.
    #[error("cannot parse {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Template execution failed for a unit.
    #[error("rendering {unit} failed: {reason}")]
    RenderingFailed { unit: String, reason: String },

    /// Rendered text did not survive the canonical formatting pass.
    #[error("formatting {unit} failed: {reason}")]
    FormatFailed { unit: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathResolution { path, .. } => vec![
                format!("Could not resolve: {}", path.display()),
                "Check that the directory exists and is reachable".into(),
            ],
            Self::SourceScan { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Point --in at a directory containing generated *_grpc.pb.go files".into(),
            ],
            Self::ParseFailed { path, .. } => vec![
                format!("File is not syntactically valid: {}", path.display()),
                "Regenerate the file with protoc before scaffolding from it".into(),
            ],
            Self::RenderingFailed { unit, .. } | Self::FormatFailed { unit, .. } => vec![
                format!("Unit '{}' produced invalid output and was skipped", unit),
                "Remaining units were still generated".into(),
                "Run with -vv to see the offending signature".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathResolution { .. } | Self::SourceScan { .. } => ErrorCategory::NotFound,
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } | Self::FormatFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
