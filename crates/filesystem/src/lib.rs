//! File system access for image-sequence.
//!
//! This crate holds everything the sequence engine needs from the disk:
//! - `DirectoryLister` - Abstract "list files in a directory" capability
//! - `LocalDirectoryLister` - Real file system implementation (walkdir)
//! - `FamilyFilter` - Glob pre-filter for sibling file names

pub mod error;
pub mod filter;
pub mod lister;

// Re-export main types
pub use error::FileSystemError;
pub use filter::{escape_glob, FamilyFilter};
pub use lister::{DirectoryEntry, DirectoryLister, LocalDirectoryLister};
