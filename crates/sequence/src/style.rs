//! Padding styles and segment ordering.

use std::fmt;
use std::str::FromStr;

use image_sequence_common::{MAX_PADDING, UDIM_PADDING, UDIM_TOKEN};
use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::frame::Frame;

/// Textual convention used to render the frame slot of a sequence path.
///
/// Styles round-trip through their token text (`"%"`, `"#"`, `"@"`,
/// `"<UDIM>"`, `"[]"`, `"$F"`, `"$FF"` or any other single punctuation
/// character), which is also their serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaddingStyle {
    /// printf-style `%04d`.
    Printf,
    /// Hash run `####`.
    #[default]
    Hash,
    /// At-sign run `@@@@`.
    At,
    /// Literal `<UDIM>` tile token, always four digits wide.
    Udim,
    /// Flame bracket range `[1001-1089]`.
    Flame,
    /// Houdini integer frame `$F`, `$F4`.
    Houdini,
    /// Houdini fractional frame `$FF`.
    HoudiniFraction,
    /// Run of any other single character, e.g. `****`.
    Custom(RunChar),
}

/// Character repeated by a custom run style.
///
/// Only characters that cannot appear in names or other frame tokens are
/// accepted, so every custom run parses back as a frame token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunChar(char);

impl RunChar {
    /// Validate a run character.
    ///
    /// # Errors
    /// Returns error for characters that may appear in names or other frame
    /// tokens (alphanumerics, `.`, `_`, `-`, `%`, `$`, `<`, `>`, `[`, `]`,
    /// `#`, `@`), whitespace and path separators.
    pub fn new(ch: char) -> Result<Self, SequenceError> {
        if ch.is_alphanumeric()
            || matches!(ch, '.' | '_' | '-' | '%' | '$' | '<' | '>' | '[' | ']' | '#' | '@')
            || ch.is_whitespace()
            || image_sequence_common::is_separator(ch)
        {
            return Err(SequenceError::InvalidPaddingStyle {
                value: ch.to_string(),
            });
        }
        Ok(Self(ch))
    }

    /// The validated character.
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl PaddingStyle {
    /// Create a run style from a padding character.
    ///
    /// `#` and `@` map to their named styles.
    ///
    /// # Errors
    /// Returns error if `ch` is rejected by [`RunChar::new`].
    pub fn custom(ch: char) -> Result<Self, SequenceError> {
        match ch {
            '#' => Ok(PaddingStyle::Hash),
            '@' => Ok(PaddingStyle::At),
            c => RunChar::new(c).map(PaddingStyle::Custom),
        }
    }

    /// The repeated character of run styles.
    pub fn run_char(&self) -> Option<char> {
        match self {
            PaddingStyle::Hash => Some('#'),
            PaddingStyle::At => Some('@'),
            PaddingStyle::Custom(c) => Some(c.as_char()),
            _ => None,
        }
    }

    /// Render the frame slot text, without the leading separator.
    ///
    /// # Arguments
    /// * `padding` - Digit width; `0` renders nothing
    /// * `range` - First and last frame, used by the Flame style
    pub fn render_token(&self, padding: usize, range: Option<(&Frame, &Frame)>) -> String {
        if padding == 0 {
            return String::new();
        }
        let padding: usize = padding.min(MAX_PADDING);

        match self {
            PaddingStyle::Printf => format!("%0{}d", padding),
            PaddingStyle::Hash | PaddingStyle::At | PaddingStyle::Custom(_) => {
                let ch: char = self.run_char().unwrap_or('#');
                std::iter::repeat(ch).take(padding).collect()
            }
            PaddingStyle::Udim => UDIM_TOKEN.to_string(),
            PaddingStyle::Flame => {
                let zero: Frame = Frame::new(0);
                let (start, end): (&Frame, &Frame) = range.unwrap_or((&zero, &zero));
                format!(
                    "[{}-{}]",
                    start.format_padded(padding),
                    end.format_padded(padding)
                )
            }
            PaddingStyle::Houdini if padding == 1 => "$F".to_string(),
            PaddingStyle::Houdini => format!("$F{}", padding),
            PaddingStyle::HoudiniFraction => "$FF".to_string(),
        }
    }

    /// Padding this style forces on a sequence that has a frame slot.
    pub fn fixed_padding(&self) -> Option<usize> {
        match self {
            PaddingStyle::Udim => Some(UDIM_PADDING),
            _ => None,
        }
    }
}

impl fmt::Display for PaddingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingStyle::Printf => f.write_str("%"),
            PaddingStyle::Hash => f.write_str("#"),
            PaddingStyle::At => f.write_str("@"),
            PaddingStyle::Udim => f.write_str(UDIM_TOKEN),
            PaddingStyle::Flame => f.write_str("[]"),
            PaddingStyle::Houdini => f.write_str("$F"),
            PaddingStyle::HoudiniFraction => f.write_str("$FF"),
            PaddingStyle::Custom(c) => write!(f, "{}", c.as_char()),
        }
    }
}

impl FromStr for PaddingStyle {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "%" | "printf" => Ok(PaddingStyle::Printf),
            "#" | "hash" => Ok(PaddingStyle::Hash),
            "@" | "at" => Ok(PaddingStyle::At),
            "<UDIM>" | "udim" => Ok(PaddingStyle::Udim),
            "[]" | "flame" => Ok(PaddingStyle::Flame),
            "$F" | "houdini" => Ok(PaddingStyle::Houdini),
            "$FF" | "houdini-frac" => Ok(PaddingStyle::HoudiniFraction),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => PaddingStyle::custom(c),
                    _ => Err(SequenceError::InvalidPaddingStyle {
                        value: s.to_string(),
                    }),
                }
            }
        }
    }
}

impl TryFrom<String> for PaddingStyle {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaddingStyle> for String {
    fn from(style: PaddingStyle) -> Self {
        style.to_string()
    }
}

/// One of the three segments of a sequence basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The file name stem.
    Name,
    /// The frame slot, including its leading separator.
    Frame,
    /// The extension, including its leading dot.
    Extension,
}

impl Segment {
    fn placeholder(&self) -> &'static str {
        match self {
            Segment::Name => "{name}",
            Segment::Frame => "{frame}",
            Segment::Extension => "{ext}",
        }
    }
}

/// Order in which the segments of a basename are rendered.
///
/// Written as a template such as `{name}{frame}{ext}` (the default) or
/// `{name}{ext}{frame}`; each placeholder appears exactly once and nothing
/// else is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamePattern {
    segments: [Segment; 3],
}

impl NamePattern {
    /// Create a pattern from an explicit segment order.
    ///
    /// # Errors
    /// Returns error if a segment is repeated.
    pub fn new(segments: [Segment; 3]) -> Result<Self, SequenceError> {
        let pattern: NamePattern = Self { segments };
        for (idx, segment) in segments.iter().enumerate() {
            if segments[idx + 1..].contains(segment) {
                return Err(SequenceError::InvalidNamePattern {
                    pattern: pattern.to_string(),
                    reason: format!("{} appears more than once", segment.placeholder()),
                });
            }
        }
        Ok(pattern)
    }

    /// The segment order.
    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    /// Render a basename from its parts.
    ///
    /// # Arguments
    /// * `name` - File name stem
    /// * `frame` - Frame slot text with its separator, or empty
    /// * `extension` - Extension with its dot
    pub fn render(&self, name: &str, frame: &str, extension: &str) -> String {
        let mut rendered: String = String::with_capacity(name.len() + frame.len() + extension.len());
        for segment in &self.segments {
            rendered.push_str(match segment {
                Segment::Name => name,
                Segment::Frame => frame,
                Segment::Extension => extension,
            });
        }
        rendered
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        Self {
            segments: [Segment::Name, Segment::Frame, Segment::Extension],
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.placeholder())?;
        }
        Ok(())
    }
}

impl FromStr for NamePattern {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| SequenceError::InvalidNamePattern {
            pattern: s.to_string(),
            reason,
        };

        let mut segments: Vec<Segment> = Vec::with_capacity(3);
        let mut rest: &str = s;

        while !rest.is_empty() {
            let segment: Segment = [Segment::Name, Segment::Frame, Segment::Extension]
                .into_iter()
                .find(|segment| rest.starts_with(segment.placeholder()))
                .ok_or_else(|| invalid(format!("unexpected text '{}'", rest)))?;
            if segments.contains(&segment) {
                return Err(invalid(format!("{} appears more than once", segment.placeholder())));
            }
            rest = &rest[segment.placeholder().len()..];
            segments.push(segment);
        }

        match segments.as_slice() {
            [a, b, c] => Ok(Self {
                segments: [*a, *b, *c],
            }),
            _ => Err(invalid(
                "expected each of {name}, {frame} and {ext} exactly once".to_string(),
            )),
        }
    }
}

impl TryFrom<String> for NamePattern {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamePattern> for String {
    fn from(pattern: NamePattern) -> Self {
        pattern.to_string()
    }
}
