//! Canonical import paths for files living in the shared module cache.
//!
//! The module cache stores checkouts under escaped, version-qualified
//! directory names. Turning a disk path back into an import path means:
//!
//! 1. strip the cache root (or, for paths outside the cache, treat the path
//!    as rooted at a fixed hosting prefix),
//! 2. drop the `@v<version>-<timestamp>-<hash>` qualifier segment,
//! 3. decode the `!x` → `X` escaping the cache applies to uppercase letters.
//!
//! Decoding failures are recoverable: the caller logs them and skips the
//! affected file, the run continues.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::domain::error::DomainError;

/// Fallback prefix for absolute paths outside the module cache.
const HOST_PREFIX: &str = "github.com";

/// Marker the cache uses to escape an uppercase letter.
const ESCAPE_MARKER: char = '!';

/// Resolves absolute disk paths into canonical import paths.
#[derive(Debug, Clone)]
pub struct ImportPathResolver {
    cache_root: PathBuf,
    version_qualifier: Regex,
}

impl ImportPathResolver {
    /// Create a resolver anchored at the given module-cache root
    /// (conventionally `$HOME/go/pkg/mod`).
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            version_qualifier: Regex::new("@v[0-9.]+-[0-9a-z]+-[0-9a-z]+")
                .expect("version qualifier pattern compiles"),
        }
    }

    /// Resolve an absolute disk path to an import path.
    pub fn resolve(&self, path: &Path) -> Result<String, DomainError> {
        let raw = match path.strip_prefix(&self.cache_root) {
            Ok(under_cache) => under_cache
                .to_str()
                .ok_or_else(|| DomainError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?
                .to_string(),
            Err(_) => {
                let outside = path.to_str().ok_or_else(|| DomainError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?;
                format!("{HOST_PREFIX}{outside}")
            }
        };

        let unversioned = self.version_qualifier.replace_all(&raw, "");
        decode_escapes(&unversioned)
    }
}

/// Decode `!x` escape sequences back into uppercase letters.
fn decode_escapes(encoded: &str) -> Result<String, DomainError> {
    let mut decoded = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        if c != ESCAPE_MARKER {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped) if escaped.is_ascii_lowercase() => {
                decoded.push(escaped.to_ascii_uppercase());
            }
            Some(escaped) => {
                return Err(DomainError::EscapeDecode {
                    path: encoded.to_string(),
                    reason: format!("'{ESCAPE_MARKER}' must precede a lowercase letter, found '{escaped}'"),
                });
            }
            None => {
                return Err(DomainError::EscapeDecode {
                    path: encoded.to_string(),
                    reason: format!("trailing '{ESCAPE_MARKER}' with nothing to decode"),
                });
            }
        }
    }

    Ok(decoded)
}
