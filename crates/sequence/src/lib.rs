//! Numbered file sequences.
//!
//! Renders, simulations and texture sets are stored as one file per frame:
//! `plate.1001.exr`, `plate.1002.exr`, ... This crate reads any one of those
//! paths (or a pattern such as `plate.####.exr`) into a [`Sequence`], finds
//! the remaining frames on disk and renders paths back in any padding style.
//!
//! - [`Sequence`] - The sequence value object: parse, mutate, format, merge
//! - [`SequenceGrammar`] - Decomposes a basename into name, frame and extension
//! - [`PaddingStyle`] - Frame token flavours (`%04d`, `####`, `@@@@`, `<UDIM>`, ...)
//! - [`find_sequence_on_disk`] - Parse a path and collect its siblings
//!
//! # Example
//!
//! ```
//! use image_sequence::{PaddingStyle, Sequence};
//!
//! let mut seq = Sequence::new("/shots/sh010/plate.1001.exr").unwrap();
//! seq.set_frames(1001..=1003);
//!
//! assert_eq!(seq.path(), "/shots/sh010/plate.####.exr");
//! assert_eq!(
//!     seq.format_with_padding_style(PaddingStyle::Flame, 0),
//!     "/shots/sh010/plate.[1001-1003].exr"
//! );
//! ```

pub mod error;
pub mod frame;
pub mod grammar;
pub mod options;
pub mod scanner;
pub mod sequence;
pub mod style;

// Re-export main types
pub use error::SequenceError;
pub use frame::Frame;
pub use grammar::{FrameMatch, GrammarMatch, SequenceGrammar};
pub use options::SequenceOptions;
pub use scanner::find_sequence_on_disk;
pub use sequence::Sequence;
pub use style::{NamePattern, PaddingStyle, RunChar, Segment};

// Re-export file system access so callers need only this crate
pub use image_sequence_filesystem::{
    DirectoryEntry, DirectoryLister, FileSystemError, LocalDirectoryLister,
};
