//! Shared error types used across image-sequence crates.

use thiserror::Error;

/// Path-related errors shared across crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path cannot be represented as UTF-8 text.
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },
}

impl PathError {
    /// Create a NonUtf8Path error from a native path.
    ///
    /// # Arguments
    /// * `path` - The path that failed conversion
    pub fn non_utf8(path: &std::path::Path) -> Self {
        Self::NonUtf8Path {
            path: path.to_string_lossy().into_owned(),
        }
    }
}
