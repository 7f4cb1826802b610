//! Configuration options for parsing and rendering sequences.

use image_sequence_common::DEFAULT_COMPOUND_EXTENSIONS;
use serde::{Deserialize, Serialize};

use crate::style::{NamePattern, PaddingStyle};

/// Configuration options for sequence parsing.
///
/// The same options are reused when sibling files are parsed during disk
/// discovery, so every fragment is read with the grammar of its subject.
///
/// # Example
///
/// ```
/// use image_sequence::{PaddingStyle, Sequence, SequenceOptions};
///
/// let options = SequenceOptions::default()
///     .with_padding_style(PaddingStyle::Printf)
///     .with_compound_extension("abc.gz");
///
/// let seq = Sequence::with_options("/cache/sim.0012.abc.gz", &options).unwrap();
/// assert_eq!(seq.path(), "/cache/sim.%04d.abc.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceOptions {
    /// Style used when the parsed token does not declare its own.
    pub padding_style: PaddingStyle,
    /// Segment order used when rendering paths.
    pub name_pattern: NamePattern,
    /// Two-component extensions taken as a single extension (without the
    /// leading dot, e.g. `bgeo.sc`).
    pub compound_extensions: Vec<String>,
    /// Whether `name.1001.5.ext` is read as the decimal frame `1001.5`.
    pub decimal_frames: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            padding_style: PaddingStyle::default(),
            name_pattern: NamePattern::default(),
            compound_extensions: DEFAULT_COMPOUND_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            decimal_frames: true,
        }
    }
}

impl SequenceOptions {
    /// Set the default padding style.
    ///
    /// # Arguments
    /// * `padding_style` - Style for tokens that don't declare one
    pub fn with_padding_style(mut self, padding_style: PaddingStyle) -> Self {
        self.padding_style = padding_style;
        self
    }

    /// Set the segment order.
    ///
    /// # Arguments
    /// * `name_pattern` - Render order of name, frame and extension
    pub fn with_name_pattern(mut self, name_pattern: NamePattern) -> Self {
        self.name_pattern = name_pattern;
        self
    }

    /// Replace the list of compound extensions.
    ///
    /// # Arguments
    /// * `extensions` - Extensions without the leading dot; empty disables
    ///   compound extensions entirely
    pub fn with_compound_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compound_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add one compound extension.
    ///
    /// # Arguments
    /// * `extension` - Extension without the leading dot, e.g. `vdb.gz`
    pub fn with_compound_extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        let extension: String = extension.trim_start_matches('.').to_string();
        if !self.is_compound_extension(&extension) {
            self.compound_extensions.push(extension);
        }
        self
    }

    /// Enable or disable decimal frame literals.
    ///
    /// # Arguments
    /// * `enabled` - `false` reads `name.1001.5.ext` as name `name.1001`, frame `5`
    pub fn with_decimal_frames(mut self, enabled: bool) -> Self {
        self.decimal_frames = enabled;
        self
    }

    /// Check whether an extension (without leading dot) is a configured compound.
    ///
    /// Matching is ASCII case-insensitive.
    pub fn is_compound_extension(&self, extension: &str) -> bool {
        self.compound_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }
}
