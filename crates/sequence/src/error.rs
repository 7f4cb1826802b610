//! Error types for sequence operations.

use image_sequence_filesystem::FileSystemError;
use thiserror::Error;

/// Errors that can occur while parsing, formatting or discovering sequences.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Input could not be treated as a text path.
    #[error("Expected a UTF-8 path, got {type_name}: {path}")]
    InvalidInputType {
        /// Description of the received input type.
        type_name: &'static str,
        /// Lossy rendering of the input.
        path: String,
    },

    /// Basename does not match the file sequence grammar.
    #[error("Unable to parse file sequence from path: {path}")]
    Parse {
        /// The offending path.
        path: String,
    },

    /// Requested frame index is outside the frame list.
    #[error("Frame index {index} out of range for sequence with {len} frames")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of frames in the sequence.
        len: usize,
    },

    /// Sequences from different families cannot be merged.
    #[error("Cannot merge unrelated sequences: {expected} and {actual}")]
    MergeMismatch {
        /// Abstract path of the receiving sequence.
        expected: String,
        /// Abstract path of the sequence being merged in.
        actual: String,
    },

    /// Name pattern template is malformed.
    #[error("Invalid name pattern '{pattern}': {reason}")]
    InvalidNamePattern {
        /// The template text.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Padding style text is not recognised.
    #[error("Invalid padding style: {value}")]
    InvalidPaddingStyle {
        /// The rejected value.
        value: String,
    },

    /// Frame number text is not an integer or exact decimal.
    #[error("Invalid frame number: {value}")]
    InvalidFrame {
        /// The rejected value.
        value: String,
    },

    /// File system access failed.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}
