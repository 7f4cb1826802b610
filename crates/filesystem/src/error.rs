//! Error types for file system operations.

use thiserror::Error;

/// Errors that can occur while reading the file system.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// IO error while reading a directory or entry.
    #[error("IO error at {path}: {source}")]
    IoError {
        /// Path where the error occurred.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: String,
    },

    /// Glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlobPattern {
        /// The pattern that failed.
        pattern: String,
        /// Reason reported by the glob compiler.
        reason: String,
    },
}

impl FileSystemError {
    /// Create an IoError from std::io::Error.
    ///
    /// # Arguments
    /// * `path` - Path where the error occurred
    /// * `source` - The underlying IO error
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Check whether this error means the directory does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            FileSystemError::IoError { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            FileSystemError::NotADirectory { .. } => false,
            FileSystemError::InvalidGlobPattern { .. } => false,
        }
    }
}
