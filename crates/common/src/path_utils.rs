//! Path splitting and joining on plain strings.
//!
//! Sequence paths are rendered back to the caller verbatim, so these helpers
//! work on `&str` instead of `PathBuf` and never normalize, resolve or touch
//! the file system.

use std::path::{Path, MAIN_SEPARATOR};

use crate::error::PathError;

/// Check whether a character separates path components on this platform.
pub fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}

/// Split a path into its directory and basename.
///
/// The directory keeps a lone root (`/file.exr` → `/`) and loses any other
/// trailing separators. A path without separators has an empty directory.
///
/// # Arguments
/// * `path` - Path to split
///
/// # Returns
/// `(directory, basename)`, both borrowed from `path`.
pub fn split_path(path: &str) -> (&str, &str) {
    let split_at: usize = match path.rfind(is_separator) {
        Some(idx) => idx + 1,
        None => return ("", path),
    };

    let head: &str = &path[..split_at];
    let basename: &str = &path[split_at..];

    let trimmed: &str = head.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // Root only, keep it as-is
        (head, basename)
    } else {
        (trimmed, basename)
    }
}

/// Join a directory and a basename.
///
/// # Arguments
/// * `directory` - Parent directory, possibly empty
/// * `basename` - File name to append
///
/// # Returns
/// The basename alone when the directory is empty, otherwise both parts with
/// exactly one separator between them.
pub fn join_path(directory: &str, basename: &str) -> String {
    if directory.is_empty() {
        return basename.to_string();
    }

    let mut joined: String = String::with_capacity(directory.len() + basename.len() + 1);
    joined.push_str(directory);
    if !directory.ends_with(is_separator) {
        joined.push(MAIN_SEPARATOR);
    }
    joined.push_str(basename);
    joined
}

/// Borrow a native path as UTF-8 text.
///
/// # Errors
/// Returns `PathError::NonUtf8Path` if the path is not valid UTF-8.
pub fn path_to_str(path: &Path) -> Result<&str, PathError> {
    path.to_str().ok_or_else(|| PathError::non_utf8(path))
}
