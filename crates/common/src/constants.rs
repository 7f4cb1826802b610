//! Shared constants used across image-sequence crates.

/// Marker substituted for the frame slot when comparing sequence families.
/// Never shown to users.
pub const FRAME_SENTINEL: &str = "$FRAME";

/// Literal token used by the UDIM texture tiling convention.
pub const UDIM_TOKEN: &str = "<UDIM>";

/// UDIM tile numbers are always four digits wide.
pub const UDIM_PADDING: usize = 4;

/// Separator between the name, frame and extension segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// Compound extensions recognised by default (without the leading dot).
pub const DEFAULT_COMPOUND_EXTENSIONS: &[&str] = &["bgeo.sc", "bgeo.gz", "geo.sc", "vdb.sc", "tar.gz"];

/// Widest frame padding accepted when parsing or rendering.
pub const MAX_PADDING: usize = 64;
