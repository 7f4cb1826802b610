//! Shared types and utilities for image-sequence.
//!
//! This crate provides functionality used across all image-sequence crates:
//! - String-based path splitting and joining that round-trips exactly
//! - Shared constants (frame sentinel, UDIM token)
//! - Shared error types

pub mod constants;
pub mod error;
pub mod path_utils;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::PathError;
pub use path_utils::{is_separator, join_path, path_to_str, split_path};
