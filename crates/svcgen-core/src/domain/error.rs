// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (units are rebuilt per run, nothing holds OS handles)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Import path decoding (recovered per-file, never aborts the run)
    // ========================================================================
    #[error("cannot decode escaped path '{path}': {reason}")]
    EscapeDecode { path: String, reason: String },

    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid generation unit: {0}")]
    InvalidUnit(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EscapeDecode { path, .. } => vec![
                format!("The module cache path '{}' is malformed", path),
                "'!' must be followed by a lowercase letter in cache paths".into(),
                "The affected file is skipped; remaining files are still generated".into(),
            ],
            Self::NonUtf8Path { path } => vec![
                format!("Cannot derive an import path from: {}", path.display()),
                "Rename the directory to plain ASCII/UTF-8".into(),
            ],
            Self::InvalidUnit(msg) => vec![format!("Details: {}", msg)],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EscapeDecode { .. } | Self::NonUtf8Path { .. } => ErrorCategory::Validation,
            Self::InvalidUnit(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
