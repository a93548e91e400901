//! SHA-256 checksum utilities
//!
//! Provides a single canonical checksum format (`sha256:<hex>`) used for
//! binary change detection. Binary files are compared by digest so they are
//! never opened as text.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of in-memory content.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn content_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// Returns `Ok(None)` when the file does not exist, so callers can compare
/// against a destination that has not been written yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn file_checksum(path: &NormalizedPath) -> Result<Option<String>> {
    let native = path.to_native();
    if !native.exists() {
        return Ok(None);
    }
    let content = std::fs::read(&native).map_err(|e| Error::io(&native, e))?;
    Ok(Some(content_checksum(&content)))
}
