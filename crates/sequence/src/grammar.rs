//! Filename grammar for file sequences.
//!
//! A basename decomposes into `name`, an optional frame segment and an
//! extension, separated by dots:
//!
//! ```text
//! basename  := name [ "." frame ] extension
//! extension := "." word [ "." word ]        (two words only if configured)
//! frame     := digits [ "." digits ]        1. literal (decimal if enabled)
//!            | "%0" digits "d"              2. printf
//!            | "<UDIM>"                     3. UDIM
//!            | "[" digits "-" digits "]"    4. Flame range
//!            | run of "#", "@" or custom    5. padding run
//!            | "$F" [digits] | "$FF"        6. Houdini
//!                                           7. absent
//! ```
//!
//! Alternatives are tried in the order listed and the first match wins. The
//! last dot group is always the extension and the last group before it is
//! the only frame candidate, so `name.[30-40].[10-20].ext` has the name
//! `name.[30-40]` and the frame `[10-20]`. A trailing group that matches no
//! alternative stays part of the name, as does any token wider than
//! `MAX_PADDING` digits.

use image_sequence_common::MAX_PADDING;

use crate::frame::Frame;
use crate::options::SequenceOptions;
use crate::style::PaddingStyle;

/// Frame representation found at the frame position of a basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameMatch {
    /// No frame segment.
    Absent,
    /// Integer or decimal literal; `digits` is the length of the integer run.
    Literal { frame: Frame, digits: usize },
    /// printf token `%0Nd`.
    Printf { padding: usize },
    /// `<UDIM>` token.
    Udim,
    /// Flame range `[start-end]`; `digits` is the length of `start`.
    Flame { start: Frame, end: Frame, digits: usize },
    /// Run of a single padding character.
    Run { ch: char, padding: usize },
    /// Houdini `$F` / `$F4`.
    Houdini { padding: usize },
    /// Houdini `$FF`.
    HoudiniFraction,
}

impl FrameMatch {
    /// Padding implied by the matched representation.
    pub fn padding(&self) -> usize {
        match self {
            FrameMatch::Absent => 0,
            FrameMatch::Literal { digits, .. } => *digits,
            FrameMatch::Printf { padding } => *padding,
            FrameMatch::Udim => image_sequence_common::UDIM_PADDING,
            FrameMatch::Flame { digits, .. } => *digits,
            FrameMatch::Run { padding, .. } => *padding,
            FrameMatch::Houdini { padding } => *padding,
            FrameMatch::HoudiniFraction => 1,
        }
    }

    /// Style the representation forces regardless of the caller's choice.
    pub fn forced_style(&self) -> Option<PaddingStyle> {
        match self {
            FrameMatch::Udim => Some(PaddingStyle::Udim),
            FrameMatch::Flame { .. } => Some(PaddingStyle::Flame),
            FrameMatch::Houdini { .. } => Some(PaddingStyle::Houdini),
            FrameMatch::HoudiniFraction => Some(PaddingStyle::HoudiniFraction),
            _ => None,
        }
    }

    /// Frames carried by the representation itself.
    pub fn frames(&self) -> Vec<Frame> {
        match self {
            FrameMatch::Literal { frame, .. } => vec![frame.clone()],
            FrameMatch::Flame { start, end, .. } => vec![start.clone(), end.clone()],
            _ => Vec::new(),
        }
    }
}

/// A successfully decomposed basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMatch {
    /// File name stem.
    pub name: String,
    /// Frame representation.
    pub frame: FrameMatch,
    /// Extension with its leading dot.
    pub extension: String,
}

/// Parser for sequence basenames.
#[derive(Debug, Clone, Copy)]
pub struct SequenceGrammar<'a> {
    options: &'a SequenceOptions,
}

impl<'a> SequenceGrammar<'a> {
    /// Create a grammar configured by sequence options.
    ///
    /// # Arguments
    /// * `options` - Compound extensions, decimal frames and custom run
    ///   character are taken from here
    pub fn new(options: &'a SequenceOptions) -> Self {
        Self { options }
    }

    /// Decompose a basename.
    ///
    /// # Arguments
    /// * `basename` - File name without directory
    ///
    /// # Returns
    /// The decomposition, or `None` if the basename is not a valid sequence
    /// file name (no extension, empty name or disallowed characters).
    pub fn parse(&self, basename: &str) -> Option<GrammarMatch> {
        let (stem, extension): (&str, &str) = self.split_extension(basename)?;
        let (name, frame): (&str, FrameMatch) = self.split_frame(stem);

        if !is_valid_name(name) {
            return None;
        }

        Some(GrammarMatch {
            name: name.to_string(),
            frame,
            extension: extension.to_string(),
        })
    }

    /// Split off the extension, returning `(stem, extension)`.
    fn split_extension<'b>(&self, basename: &'b str) -> Option<(&'b str, &'b str)> {
        let last_dot: usize = basename.rfind('.')?;
        if !is_word(&basename[last_dot + 1..]) {
            return None;
        }

        let stem: &str = &basename[..last_dot];
        if let Some(prev_dot) = stem.rfind('.') {
            let candidate: &str = &basename[prev_dot + 1..];
            if is_word(&stem[prev_dot + 1..]) && self.options.is_compound_extension(candidate) {
                return Some((&basename[..prev_dot], &basename[prev_dot..]));
            }
        }

        Some((stem, &basename[last_dot..]))
    }

    /// Split the frame segment off the stem, returning `(name, frame)`.
    fn split_frame<'b>(&self, stem: &'b str) -> (&'b str, FrameMatch) {
        let dot: usize = match stem.rfind('.') {
            Some(dot) => dot,
            None => return (stem, FrameMatch::Absent),
        };

        let name: &str = &stem[..dot];
        let segment: &str = &stem[dot + 1..];

        let frame: FrameMatch = match self.classify(segment) {
            Some(frame) => frame,
            None => return (stem, FrameMatch::Absent),
        };

        if let FrameMatch::Literal { .. } = frame {
            if let Some(decimal) = self.decimal_split(name, segment) {
                return decimal;
            }
        }

        if is_valid_name(name) {
            (name, frame)
        } else {
            (stem, FrameMatch::Absent)
        }
    }

    /// Try to read `<name>.<digits>.<fraction>` as a decimal frame.
    fn decimal_split<'b>(&self, name: &'b str, fraction: &str) -> Option<(&'b str, FrameMatch)> {
        if !self.options.decimal_frames {
            return None;
        }

        let dot: usize = name.rfind('.')?;
        let base: &str = &name[..dot];
        let whole_text: &str = &name[dot + 1..];
        if !is_digits(whole_text) || whole_text.len() > MAX_PADDING || !is_valid_name(base) {
            return None;
        }

        let whole: i64 = whole_text.parse().ok()?;
        let frame: Frame = Frame::with_fraction(whole, fraction).ok()?;
        Some((
            base,
            FrameMatch::Literal {
                frame,
                digits: whole_text.len(),
            },
        ))
    }

    /// Match a single dot-free segment against the frame alternatives.
    ///
    /// Tokens wider than `MAX_PADDING` are not frames.
    fn classify(&self, segment: &str) -> Option<FrameMatch> {
        self.classify_token(segment)
            .filter(|frame| frame.padding() <= MAX_PADDING)
    }

    fn classify_token(&self, segment: &str) -> Option<FrameMatch> {
        // 1. integer literal
        if is_digits(segment) {
            let whole: i64 = segment.parse().ok()?;
            return Some(FrameMatch::Literal {
                frame: Frame::new(whole),
                digits: segment.len(),
            });
        }

        // 2. printf token
        if let Some(width) = segment
            .strip_prefix("%0")
            .and_then(|rest| rest.strip_suffix('d'))
        {
            if is_digits(width) {
                let padding: usize = width.parse().ok()?;
                return (padding > 0).then_some(FrameMatch::Printf { padding });
            }
        }

        // 3. UDIM
        if segment == image_sequence_common::UDIM_TOKEN {
            return Some(FrameMatch::Udim);
        }

        // 4. Flame range
        if let Some(inner) = segment
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if let Some((start, end)) = inner.split_once('-') {
                if is_digits(start) && is_digits(end) {
                    let start_frame: Frame = Frame::new(start.parse().ok()?);
                    let end_frame: Frame = Frame::new(end.parse().ok()?);
                    if start_frame <= end_frame {
                        return Some(FrameMatch::Flame {
                            start: start_frame,
                            end: end_frame,
                            digits: start.len(),
                        });
                    }
                }
            }
        }

        // 5. padding run
        if let Some(first) = segment.chars().next() {
            let custom: Option<char> = match self.options.padding_style {
                PaddingStyle::Custom(c) => Some(c.as_char()),
                _ => None,
            };
            let is_run_char: bool = first == '#' || first == '@' || Some(first) == custom;
            if is_run_char && segment.chars().all(|c| c == first) {
                return Some(FrameMatch::Run {
                    ch: first,
                    padding: segment.chars().count(),
                });
            }
        }

        // 6. Houdini
        match segment {
            "$F" | "$f" => return Some(FrameMatch::Houdini { padding: 1 }),
            "$FF" | "$ff" => return Some(FrameMatch::HoudiniFraction),
            _ => {}
        }
        if let Some(width) = segment
            .strip_prefix("$F")
            .or_else(|| segment.strip_prefix("$f"))
        {
            if is_digits(width) && !width.starts_with('0') {
                let padding: usize = width.parse().ok()?;
                return Some(FrameMatch::Houdini { padding });
            }
        }

        None
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Names are non-empty, not only dots, and limited to word characters, `-`,
/// brackets and dots. A leading dot (hidden file) is allowed.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().all(|c| c == '.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '[' | ']' | '.'))
}
