//! Directory listing used to discover sibling files.

use std::path::Path;

use image_sequence_common::join_path;
use walkdir::WalkDir;

use crate::error::FileSystemError;

/// A single entry returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path of the entry.
    pub path: String,
    /// File name without directory.
    pub name: String,
    /// Whether the entry is a regular file (after following symlinks).
    pub is_file: bool,
}

impl DirectoryEntry {
    /// Create an entry for a regular file.
    ///
    /// # Arguments
    /// * `path` - Full path of the file
    /// * `name` - File name without directory
    pub fn file(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_file: true,
        }
    }

    /// Create an entry for anything that is not a regular file.
    ///
    /// # Arguments
    /// * `path` - Full path of the entry
    /// * `name` - Entry name without directory
    pub fn other(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_file: false,
        }
    }
}

/// Read-only access to a directory tree.
///
/// The sequence engine only ever lists one directory at a time and checks
/// single paths for existence. Implementations must not rely on or promise
/// any ordering of the returned entries.
pub trait DirectoryLister {
    /// List the immediate children of a directory.
    ///
    /// # Arguments
    /// * `directory` - Directory to list
    ///
    /// # Errors
    /// Returns error if the directory does not exist or cannot be read.
    fn list_entries(&self, directory: &str) -> Result<Vec<DirectoryEntry>, FileSystemError>;

    /// Check whether a path exists.
    ///
    /// # Arguments
    /// * `path` - Path to check
    fn path_exists(&self, path: &str) -> bool;
}

/// `DirectoryLister` backed by the local file system.
#[derive(Debug, Clone, Copy)]
pub struct LocalDirectoryLister {
    /// Whether symlinks are followed when classifying entries.
    follow_symlinks: bool,
}

impl LocalDirectoryLister {
    /// Create a lister that follows symlinks.
    pub fn new() -> Self {
        Self {
            follow_symlinks: true,
        }
    }

    /// Set whether symlinks are followed when classifying entries.
    ///
    /// # Arguments
    /// * `follow` - `false` reports symlinks as non-files
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl Default for LocalDirectoryLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLister for LocalDirectoryLister {
    fn list_entries(&self, directory: &str) -> Result<Vec<DirectoryEntry>, FileSystemError> {
        let root: &Path = Path::new(directory);
        let metadata: std::fs::Metadata =
            std::fs::metadata(root).map_err(|e| FileSystemError::from_io(directory, e))?;
        if !metadata.is_dir() {
            return Err(FileSystemError::NotADirectory {
                path: directory.to_string(),
            });
        }

        let mut entries: Vec<DirectoryEntry> = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_symlinks)
        {
            let entry: walkdir::DirEntry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Broken symlinks and vanished files should not hide their siblings
                    log::warn!(
                        "Skipping unreadable entry {}: {}",
                        e.path().map(|p| p.display().to_string()).unwrap_or_default(),
                        e
                    );
                    continue;
                }
            };

            let name: &str = match entry.file_name().to_str() {
                Some(name) => name,
                None => {
                    log::warn!("Skipping non UTF-8 file name: {}", entry.path().display());
                    continue;
                }
            };

            // Same spelling as paths rendered by a sequence in this directory
            let path: String = join_path(directory, name);
            if entry.file_type().is_file() {
                entries.push(DirectoryEntry::file(path, name));
            } else {
                entries.push(DirectoryEntry::other(path, name));
            }
        }

        Ok(entries)
    }

    fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
