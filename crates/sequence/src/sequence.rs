//! The file sequence value object.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use image_sequence_common::{
    join_path, path_to_str, split_path, FRAME_SENTINEL, MAX_PADDING, SEGMENT_SEPARATOR,
};

use crate::error::SequenceError;
use crate::frame::Frame;
use crate::grammar::{GrammarMatch, SequenceGrammar};
use crate::options::SequenceOptions;
use crate::style::{NamePattern, PaddingStyle};

/// A family of files sharing a name and extension, differing by frame.
///
/// Parsed from a single path. The frame slot is rendered from the current
/// padding and padding style, so changing either is immediately reflected in
/// [`Sequence::path`].
///
/// # Example
///
/// ```
/// use image_sequence::{PaddingStyle, Sequence};
///
/// let mut seq = Sequence::new("/mock/path/file_name.1001.exr").unwrap();
/// assert_eq!(seq.path(), "/mock/path/file_name.####.exr");
///
/// seq.set_padding_style(PaddingStyle::Printf);
/// assert_eq!(seq.path(), "/mock/path/file_name.%04d.exr");
/// assert_eq!(seq.format_at_frame(12), "/mock/path/file_name.0012.exr");
/// ```
///
/// Equality compares [`Sequence::abstract_path`], so two sequences are equal
/// when they belong to the same family, whatever their padding or frames.
#[derive(Debug, Clone)]
pub struct Sequence {
    directory: String,
    name: String,
    extension: String,
    /// Rendered frame slot including its separator, empty when there is none.
    frame_token: String,
    padding: usize,
    padding_style: PaddingStyle,
    frames: BTreeSet<Frame>,
    name_pattern: NamePattern,
    /// Grammar configuration, reused for sibling files.
    options: SequenceOptions,
}

impl Sequence {
    /// Parse a path with default options.
    ///
    /// # Arguments
    /// * `path` - File path, absolute or relative
    ///
    /// # Errors
    /// Returns `SequenceError::Parse` if the basename is not a sequence file name.
    pub fn new(path: &str) -> Result<Self, SequenceError> {
        Self::with_options(path, &SequenceOptions::default())
    }

    /// Parse a path, rendering with the given style unless the token declares its own.
    ///
    /// # Arguments
    /// * `path` - File path
    /// * `padding_style` - Style for digit literals, printf tokens and padding runs
    ///
    /// # Errors
    /// Returns `SequenceError::Parse` if the basename is not a sequence file name.
    pub fn with_padding_style(path: &str, padding_style: PaddingStyle) -> Result<Self, SequenceError> {
        Self::with_options(
            path,
            &SequenceOptions::default().with_padding_style(padding_style),
        )
    }

    /// Parse a path with explicit options.
    ///
    /// # Arguments
    /// * `path` - File path
    /// * `options` - Grammar and rendering configuration
    ///
    /// # Errors
    /// Returns `SequenceError::Parse` if the basename is not a sequence file name.
    pub fn with_options(path: &str, options: &SequenceOptions) -> Result<Self, SequenceError> {
        Self::try_parse_with_options(path, options).ok_or_else(|| SequenceError::Parse {
            path: path.to_string(),
        })
    }

    /// Parse a native path.
    ///
    /// # Arguments
    /// * `path` - File path
    /// * `options` - Grammar and rendering configuration
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidInputType` if the path is not UTF-8, or
    /// `SequenceError::Parse` if the basename is not a sequence file name.
    pub fn from_path(path: &Path, options: &SequenceOptions) -> Result<Self, SequenceError> {
        let text: &str = path_to_str(path).map_err(|_| SequenceError::InvalidInputType {
            type_name: "non UTF-8 path",
            path: path.to_string_lossy().into_owned(),
        })?;
        Self::with_options(text, options)
    }

    /// Parse a path with default options, returning `None` instead of failing.
    pub fn try_parse(path: &str) -> Option<Self> {
        Self::try_parse_with_options(path, &SequenceOptions::default())
    }

    /// Parse a path with explicit options, returning `None` instead of failing.
    ///
    /// # Arguments
    /// * `path` - File path
    /// * `options` - Grammar and rendering configuration
    pub fn try_parse_with_options(path: &str, options: &SequenceOptions) -> Option<Self> {
        let (directory, basename): (&str, &str) = split_path(path);
        let parsed: GrammarMatch = match SequenceGrammar::new(options).parse(basename) {
            Some(parsed) => parsed,
            None => {
                log::debug!("Not a sequence file name: {}", path);
                return None;
            }
        };
        let seq: Sequence = Self::from_match(directory, parsed, options);
        log::debug!("Parsed {} as {}", path, seq.path());
        Some(seq)
    }

    fn from_match(directory: &str, parsed: GrammarMatch, options: &SequenceOptions) -> Self {
        let padding_style: PaddingStyle = parsed
            .frame
            .forced_style()
            .unwrap_or(options.padding_style);

        let mut padding: usize = parsed.frame.padding();
        if padding > 0 {
            padding = padding_style.fixed_padding().unwrap_or(padding);
        }

        let mut seq: Sequence = Self {
            directory: directory.to_string(),
            name: parsed.name,
            extension: parsed.extension,
            frame_token: String::new(),
            padding,
            padding_style,
            frames: parsed.frame.frames().into_iter().collect(),
            name_pattern: options.name_pattern.clone(),
            options: options.clone(),
        };
        seq.refresh_frame_token();
        seq
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Parent directory, possibly empty.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// File name without frame token or extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extension with its leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Rendered frame slot including its separator, empty when there is none.
    pub fn frame_token(&self) -> &str {
        &self.frame_token
    }

    /// Digit width of the frame number; `0` means no frame.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Current padding style.
    pub fn padding_style(&self) -> PaddingStyle {
        self.padding_style
    }

    /// Segment render order.
    pub fn name_pattern(&self) -> &NamePattern {
        &self.name_pattern
    }

    /// Options the sequence was parsed with.
    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Frames in ascending order.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.iter().cloned().collect()
    }

    /// Iterate frames in ascending order.
    pub fn iter_frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames.iter()
    }

    /// First frame, if any.
    pub fn start(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Last frame, if any.
    pub fn end(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are known.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the path has a frame slot.
    pub fn has_frame(&self) -> bool {
        !self.frame_token.is_empty()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Set the digit width.
    ///
    /// A width below 1 removes the frame slot from the path. Widths above
    /// `MAX_PADDING` are capped, and UDIM keeps its fixed width of 4.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding.min(MAX_PADDING);
        self.keep_fixed_padding();
        self.refresh_frame_token();
    }

    /// Set the padding style.
    ///
    /// Switching to UDIM always forces a width of 4, which adds a frame slot
    /// to a path that had none.
    pub fn set_padding_style(&mut self, padding_style: PaddingStyle) {
        self.padding_style = padding_style;
        if let Some(fixed) = padding_style.fixed_padding() {
            self.padding = fixed;
        }
        self.refresh_frame_token();
    }

    /// Replace all frames.
    ///
    /// Duplicates are dropped and the frames are kept sorted.
    pub fn set_frames<I, F>(&mut self, frames: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self.frames_changed();
    }

    /// Add one frame.
    pub fn add_frame(&mut self, frame: impl Into<Frame>) {
        self.frames.insert(frame.into());
        self.frames_changed();
    }

    /// Add several frames.
    pub fn extend_frames<I, F>(&mut self, frames: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
        self.frames_changed();
    }

    /// Set the parent directory.
    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.directory = directory.into();
    }

    /// Set the file name stem.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the extension, including its leading dot.
    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = extension.into();
    }

    /// Set the segment render order.
    pub fn set_name_pattern(&mut self, name_pattern: NamePattern) {
        self.name_pattern = name_pattern;
    }

    /// Set the segment render order from a template such as `{name}{ext}{frame}`.
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidNamePattern` if the template is malformed.
    pub fn set_name_template(&mut self, template: &str) -> Result<(), SequenceError> {
        self.name_pattern = template.parse()?;
        Ok(())
    }

    /// Replace the frame slot with arbitrary text.
    ///
    /// The custom token is kept until the padding, padding style or (for the
    /// Flame style) the frames change. An empty token removes the slot.
    pub fn set_custom_frame_token(&mut self, token: &str) {
        self.frame_token = if token.is_empty() {
            String::new()
        } else {
            format!("{}{}", SEGMENT_SEPARATOR, token)
        };
    }

    /// Merge frames and padding from another sequence of the same family.
    ///
    /// Frames are unioned and the smaller non-zero padding wins, since files
    /// found with fewer digits reveal the width actually in use.
    ///
    /// # Errors
    /// Returns `SequenceError::MergeMismatch` if the abstract paths differ;
    /// `self` is left untouched.
    pub fn merge(&mut self, other: &Sequence) -> Result<(), SequenceError> {
        let expected: String = self.abstract_path();
        let actual: String = other.abstract_path();
        if expected != actual {
            return Err(SequenceError::MergeMismatch { expected, actual });
        }

        self.absorb(other);
        self.refresh_frame_token();
        log::debug!("Merged {} into {} ({} frames)", actual, expected, self.frames.len());
        Ok(())
    }

    /// Union frames and take the smaller non-zero padding, without re-rendering.
    pub(crate) fn absorb(&mut self, other: &Sequence) {
        self.frames.extend(other.frames.iter().cloned());
        self.padding = match (self.padding, other.padding) {
            (0, padding) | (padding, 0) => padding,
            (a, b) => a.min(b),
        };
        self.keep_fixed_padding();
    }

    /// Overwrite the padding after a disk scan.
    pub(crate) fn assign_padding(&mut self, padding: usize) {
        self.padding = padding;
        self.keep_fixed_padding();
    }

    fn keep_fixed_padding(&mut self) {
        if self.padding > 0 {
            if let Some(fixed) = self.padding_style.fixed_padding() {
                self.padding = fixed;
            }
        }
    }

    /// Re-render the frame slot from padding, style and frames.
    ///
    /// Every mutator that touches one of those calls this, which keeps
    /// `padding == 0` and an empty frame slot in lockstep.
    pub(crate) fn refresh_frame_token(&mut self) {
        let range: Option<(&Frame, &Frame)> = self.frames.first().zip(self.frames.last());
        let token: String = self.padding_style.render_token(self.padding, range);
        self.frame_token = if token.is_empty() {
            String::new()
        } else {
            format!("{}{}", SEGMENT_SEPARATOR, token)
        };
    }

    fn frames_changed(&mut self) {
        // Flame tokens embed the range endpoints
        if self.padding_style == PaddingStyle::Flame {
            self.refresh_frame_token();
        }
    }

    // ------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------

    /// Basename rendered with the current frame slot.
    pub fn basename(&self) -> String {
        self.name_pattern
            .render(&self.name, &self.frame_token, &self.extension)
    }

    /// Full path rendered with the current frame slot.
    pub fn path(&self) -> String {
        join_path(&self.directory, &self.basename())
    }

    /// Path at a concrete frame.
    ///
    /// The integer part is zero-padded to the current padding and decimal
    /// digits are kept verbatim. Without a frame slot the path is returned
    /// unchanged.
    ///
    /// # Arguments
    /// * `frame` - Frame to substitute
    pub fn format_at_frame(&self, frame: impl Into<Frame>) -> String {
        if self.padding == 0 {
            return self.path();
        }
        let frame: Frame = frame.into();
        self.render_with_slot(&frame.format_padded(self.padding))
    }

    /// Paths of every frame, ascending.
    ///
    /// # Arguments
    /// * `offset` - Added to the integer part of each frame
    ///
    /// # Returns
    /// `[self.path()]` when the sequence has no frames.
    pub fn paths_for_all_frames(&self, offset: i64) -> Vec<String> {
        if self.frames.is_empty() {
            return vec![self.path()];
        }
        self.frames
            .iter()
            .map(|frame| self.format_at_frame(frame.offset(offset)))
            .collect()
    }

    /// Path of the frame at a position in the frame list.
    ///
    /// # Errors
    /// Returns `SequenceError::IndexOutOfRange` if there is no such frame.
    pub fn path_at_index(&self, index: usize) -> Result<String, SequenceError> {
        self.frames
            .iter()
            .nth(index)
            .map(|frame| self.format_at_frame(frame))
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Iterate the paths of every frame.
    pub fn iter_paths(&self) -> std::vec::IntoIter<String> {
        self.paths_for_all_frames(0).into_iter()
    }

    /// Render with another style without changing the sequence.
    ///
    /// # Arguments
    /// * `style` - Style to render
    /// * `padding` - Width to render; `0` uses the current padding
    ///
    /// # Returns
    /// The path with the slot rendered in `style`, or without a slot when the
    /// resulting width is zero.
    pub fn format_with_padding_style(&self, style: PaddingStyle, padding: usize) -> String {
        let mut width: usize = if padding == 0 { self.padding } else { padding };
        if width > 0 {
            width = style.fixed_padding().unwrap_or(width);
        }
        let range: Option<(&Frame, &Frame)> = self.frames.first().zip(self.frames.last());
        self.render_with_slot(&style.render_token(width, range))
    }

    /// Render with another style only if the sequence has a frame slot.
    ///
    /// Paths of single files (a `.mov` without frame) come back unchanged.
    pub fn format_optional_with_padding_style(&self, style: PaddingStyle) -> String {
        if !self.has_frame() {
            return self.path();
        }
        self.format_with_padding_style(style, 0)
    }

    /// Path with the frame slot replaced by a fixed sentinel.
    ///
    /// Identifies the sequence family: equal for any padding, style or frames.
    pub fn abstract_path(&self) -> String {
        join_path(&self.directory, &self.abstract_basename_with(&self.name_pattern))
    }

    /// Abstract basename rendered with an explicit segment order.
    pub(crate) fn abstract_basename_with(&self, pattern: &NamePattern) -> String {
        if !self.has_frame() {
            return pattern.render(&self.name, "", &self.extension);
        }
        let slot: String = format!("{}{}", SEGMENT_SEPARATOR, FRAME_SENTINEL);
        pattern.render(&self.name, &slot, &self.extension)
    }

    /// Render the path with `slot` (without separator) in the frame position.
    fn render_with_slot(&self, slot: &str) -> String {
        let frame: String = if slot.is_empty() {
            String::new()
        } else {
            format!("{}{}", SEGMENT_SEPARATOR, slot)
        };
        join_path(
            &self.directory,
            &self.name_pattern.render(&self.name, &frame, &self.extension),
        )
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.abstract_path() == other.abstract_path()
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.abstract_path().hash(state);
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl std::str::FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(values: &[i64]) -> Vec<Frame> {
        values.iter().copied().map(Frame::new).collect()
    }

    #[test]
    fn test_add_frames_dedup_and_sort() {
        let mut seq: Sequence = Sequence::new("/mock/path/file_name.@@@.exr").unwrap();
        seq.set_frames([50, 10, 20, 30, 40, 40, 10]);
        assert_eq!(seq.frames(), frames(&[10, 20, 30, 40, 50]));
    }

    #[test]
    fn test_new_success() {
        let seq: Option<Sequence> = Sequence::try_parse("/mock/path/file.1001.exr");
        assert_eq!(seq.unwrap().path(), "/mock/path/file.####.exr");
    }

    #[test]
    fn test_try_parse_invalid() {
        assert!(Sequence::try_parse("/mock/file.1001.a#$").is_none());
    }

    #[test]
    fn test_new_invalid_names_path() {
        let err: SequenceError = Sequence::new("/mock/file.1001.a#$").unwrap_err();
        assert!(matches!(err, SequenceError::Parse { ref path } if path == "/mock/file.1001.a#$"));
        assert!(err.to_string().contains("/mock/file.1001.a#$"));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_path_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path: &Path = Path::new(OsStr::from_bytes(b"/mock/file.\xff.exr"));
        let err: SequenceError =
            Sequence::from_path(path, &SequenceOptions::default()).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidInputType { .. }));
        assert!(err.to_string().contains("non UTF-8 path"));
    }

    #[test]
    fn test_from_path_utf8() {
        let seq: Sequence =
            Sequence::from_path(Path::new("/mock/file.1001.exr"), &SequenceOptions::default())
                .unwrap();
        assert_eq!(seq.padding(), 4);
    }

    #[test]
    fn test_padding_from_at_run() {
        let seq: Sequence = Sequence::new("/mock/path/file_name.@@@.exr").unwrap();
        assert_eq!(seq.padding(), 3);
    }

    #[test]
    fn test_padding_from_printf() {
        let seq: Sequence = Sequence::new("/mock/path/file_name.%02d.exr").unwrap();
        assert_eq!(seq.padding(), 2);
    }

    #[test]
    fn test_padding_from_hash_run() {
        let seq: Sequence =
            Sequence::with_padding_style("/mock/path/file_name.#####.exr", PaddingStyle::Hash)
                .unwrap();
        assert_eq!(seq.padding(), 5);
        assert_eq!(seq.format_at_frame(1001), "/mock/path/file_name.01001.exr");
    }

    #[test]
    fn test_no_padding() {
        let mut seq: Sequence = Sequence::new("/mock/path/file_name.#####.exr").unwrap();
        seq.set_padding(0);
        assert_eq!(seq.path(), "/mock/path/file_name.exr");
        assert_eq!(seq.frame_token(), "");
        assert!(!seq.has_frame());
    }

    #[test]
    fn test_padding_restored_after_clear() {
        let mut seq: Sequence = Sequence::new("/mock/file.1001.exr").unwrap();
        seq.set_padding(0);
        seq.set_padding(2);
        assert_eq!(seq.path(), "/mock/file.##.exr");
    }

    #[test]
    fn test_equals_ignores_frames() {
        let a: Sequence = Sequence::new("/mock/path/file_name.101.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/path/file_name.222.exr").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equals_ignores_padding() {
        let a: Sequence = Sequence::new("/mock/path/file_name.1.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/path/file_name.%08d.exr").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_equals_without_frame() {
        let a: Sequence = Sequence::new("/mock/path/file_name.1101.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/path/file_name.exr").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_not_equals_different_directory() {
        let a: Sequence = Sequence::new("/mock/file_name.1001.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/path/file_name.1001.exr").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_name_template() {
        let mut seq: Sequence =
            Sequence::with_padding_style("/mock/path/file_name.1001.exr", PaddingStyle::Printf)
                .unwrap();
        seq.set_name_template("{name}{ext}{frame}").unwrap();
        assert_eq!(seq.basename(), "file_name.exr.%04d");
        assert_eq!(seq.format_at_frame(7), "/mock/path/file_name.exr.0007");
    }

    #[test]
    fn test_set_name_template_invalid() {
        let mut seq: Sequence = Sequence::new("/mock/file.1001.exr").unwrap();
        let result: Result<(), SequenceError> = seq.set_name_template("{name}{ext}");
        assert!(matches!(result, Err(SequenceError::InvalidNamePattern { .. })));
        assert_eq!(seq.name_pattern(), &NamePattern::default());
    }

    #[test]
    fn test_basename_and_directory() {
        let seq: Sequence =
            Sequence::with_padding_style("/mock/path/file_name.1001.exr", PaddingStyle::Printf)
                .unwrap();
        assert_eq!(seq.basename(), "file_name.%04d.exr");
        assert_eq!(seq.directory(), "/mock/path");
        assert_eq!(seq.name(), "file_name");
    }

    #[test]
    fn test_relative_path_without_directory() {
        let seq: Sequence = Sequence::new("file_name.1001.exr").unwrap();
        assert_eq!(seq.directory(), "");
        assert_eq!(seq.path(), "file_name.####.exr");
    }

    #[test]
    fn test_extension() {
        let seq: Sequence = Sequence::new("/mock/path/file_name.1001.exr").unwrap();
        assert_eq!(seq.extension(), ".exr");

        let seq: Sequence = Sequence::new("/mock/path/file_name.exr").unwrap();
        assert_eq!(seq.extension(), ".exr");
    }

    #[test]
    fn test_set_extension() {
        let mut seq: Sequence = Sequence::new("/mock/path/file_name.exr").unwrap();
        seq.set_extension(".jpg");
        assert_eq!(seq.extension(), ".jpg");
        assert_eq!(seq.path(), "/mock/path/file_name.jpg");
    }

    #[test]
    fn test_merge_unions_frames() {
        let mut a: Sequence = Sequence::new("/mock/file_name.@@@.exr").unwrap();
        a.set_frames([10, 20, 30]);
        let mut b: Sequence = Sequence::new("/mock/file_name.@@@.exr").unwrap();
        b.set_frames([30, 40, 50]);

        a.merge(&b).unwrap();
        assert_eq!(a.frames(), frames(&[10, 20, 30, 40, 50]));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut a: Sequence = Sequence::new("/mock/file.0010.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/file.0020.exr").unwrap();

        a.merge(&b).unwrap();
        let once: Vec<Frame> = a.frames();
        a.merge(&b).unwrap();

        assert_eq!(a.frames(), once);
        assert_eq!(a.frames(), frames(&[10, 20]));
    }

    #[test]
    fn test_merge_adopts_smaller_padding() {
        let mut a: Sequence = Sequence::new("/mock/file.#########.exr").unwrap();
        let b: Sequence = Sequence::new("/mock/file.999.exr").unwrap();

        a.merge(&b).unwrap();
        assert_eq!(a.padding(), 3);
        assert_eq!(a.path(), "/mock/file.###.exr");
    }

    #[test]
    fn test_merge_mismatch_is_an_error() {
        let mut a: Sequence = Sequence::new("/mock/file_name.@@@.exr").unwrap();
        a.set_frames([10, 20, 30]);
        let mut b: Sequence = Sequence::new("/mock/path/file_name.@@@.exr").unwrap();
        b.set_frames([30, 40, 50]);

        let result: Result<(), SequenceError> = a.merge(&b);
        match result {
            Err(SequenceError::MergeMismatch { expected, actual }) => {
                assert_eq!(expected, "/mock/file_name.$FRAME.exr");
                assert_eq!(actual, "/mock/path/file_name.$FRAME.exr");
            }
            other => panic!("expected MergeMismatch, got {:?}", other),
        }
        assert_eq!(a.frames(), frames(&[10, 20, 30]));
        assert_eq!(a.padding(), 3);
    }

    #[test]
    fn test_paths_for_all_frames() {
        let mut seq: Sequence = Sequence::new("/mock/file_name.@@@.exr").unwrap();
        seq.set_frames([10, 20]);
        assert_eq!(
            seq.paths_for_all_frames(0),
            vec!["/mock/file_name.010.exr", "/mock/file_name.020.exr"]
        );
    }

    #[test]
    fn test_paths_for_all_frames_with_offset() {
        let mut seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        seq.set_frames(["1001.5".parse::<Frame>().unwrap(), Frame::new(1002)]);
        assert_eq!(
            seq.paths_for_all_frames(-1000),
            vec!["/mock/file.0001.5.exr", "/mock/file.0002.exr"]
        );
    }

    #[test]
    fn test_paths_for_all_frames_without_frames() {
        let seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        assert_eq!(seq.paths_for_all_frames(0), vec!["/mock/file.####.exr"]);

        let seq: Sequence = Sequence::new("/mock/movie.mov").unwrap();
        assert_eq!(seq.paths_for_all_frames(10), vec!["/mock/movie.mov"]);
    }

    #[test]
    fn test_iterate_paths() {
        let mut seq: Sequence = Sequence::new("/mock/file.#.exr").unwrap();
        seq.set_frames([3, 1, 2]);

        let paths: Vec<String> = (&seq).into_iter().collect();
        assert_eq!(paths, vec!["/mock/file.1.exr", "/mock/file.2.exr", "/mock/file.3.exr"]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_path_at_index() {
        let mut seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        seq.set_frames([1001, 1002]);

        assert_eq!(seq.path_at_index(1).unwrap(), "/mock/file.1002.exr");
        let err: SequenceError = seq.path_at_index(2).unwrap_err();
        assert!(matches!(err, SequenceError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_format_at_frame_printf() {
        let seq: Sequence = Sequence::new("/mock/file_name.%04d.exr").unwrap();
        assert_eq!(seq.format_at_frame(9999), "/mock/file_name.9999.exr");
    }

    #[test]
    fn test_format_at_frame_without_frame() {
        let seq: Sequence = Sequence::new("/mock/file_name.exr").unwrap();
        assert_eq!(seq.format_at_frame(9999), "/mock/file_name.exr");
    }

    #[test]
    fn test_format_at_decimal_frame() {
        let seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        let frame: Frame = "17.90".parse().unwrap();
        assert_eq!(seq.format_at_frame(frame), "/mock/file.0017.90.exr");
    }

    #[test]
    fn test_parse_decimal_frame() {
        let seq: Sequence = Sequence::new("/mock/file.0017.90.exr").unwrap();
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.name(), "file");
        assert_eq!(seq.frames()[0].to_string(), "17.90");
        assert_eq!(seq.path_at_index(0).unwrap(), "/mock/file.0017.90.exr");
    }

    #[test]
    fn test_padding_style_on_construction() {
        let seq: Sequence =
            Sequence::with_padding_style("/mock/file.4444.rat", PaddingStyle::Hash).unwrap();
        assert_eq!(seq.path(), "/mock/file.####.rat");
    }

    #[test]
    fn test_set_padding_style() {
        let mut seq: Sequence =
            Sequence::with_padding_style("/mock/file.4444.rat", PaddingStyle::Printf).unwrap();
        assert_eq!(seq.path(), "/mock/file.%04d.rat");
        seq.set_padding_style(PaddingStyle::Hash);
        assert_eq!(seq.path(), "/mock/file.####.rat");
        assert_eq!(seq.padding_style(), PaddingStyle::Hash);
    }

    #[test]
    fn test_clone_keeps_style_and_is_independent() {
        let seq: Sequence =
            Sequence::with_padding_style("/mock/file.4444.rat", PaddingStyle::At).unwrap();
        let mut copy: Sequence = seq.clone();
        assert_eq!(copy.path(), "/mock/file.@@@@.rat");

        copy.add_frame(5000);
        copy.set_padding(2);
        assert_eq!(seq.frames(), frames(&[4444]));
        assert_eq!(seq.padding(), 4);
    }

    #[test]
    fn test_format_with_padding_style() {
        let seq: Sequence = Sequence::new("/mock/file_name.101.exr").unwrap();
        assert_eq!(
            seq.format_with_padding_style(PaddingStyle::Hash, 0),
            "/mock/file_name.###.exr"
        );
        assert_eq!(
            seq.format_with_padding_style(PaddingStyle::At, 0),
            "/mock/file_name.@@@.exr"
        );
        assert_eq!(
            seq.format_with_padding_style(PaddingStyle::custom('*').unwrap(), 1),
            "/mock/file_name.*.exr"
        );
        assert_eq!(
            seq.format_with_padding_style(PaddingStyle::Udim, 0),
            "/mock/file_name.<UDIM>.exr"
        );
        // Not mutated
        assert_eq!(seq.path(), "/mock/file_name.###.exr");
    }

    #[test]
    fn test_format_with_padding_style_zero_width_collapses() {
        let seq: Sequence = Sequence::new("/mock/movie.mov").unwrap();
        assert_eq!(
            seq.format_with_padding_style(PaddingStyle::Hash, 0),
            "/mock/movie.mov"
        );
    }

    #[test]
    fn test_format_optional_with_padding_style() {
        let seq: Sequence = Sequence::new("/mock/path/file.1001.exr").unwrap();
        assert_eq!(
            seq.format_optional_with_padding_style(PaddingStyle::Houdini),
            "/mock/path/file.$F4.exr"
        );

        let seq: Sequence = Sequence::new("/mock/path/file.exr").unwrap();
        assert_eq!(
            seq.format_optional_with_padding_style(PaddingStyle::Udim),
            "/mock/path/file.exr"
        );
    }

    #[test]
    fn test_set_name() {
        let mut seq: Sequence = Sequence::new("/mock/file_name.101.exr").unwrap();
        seq.set_name("new_file_name");
        assert_eq!(seq.name(), "new_file_name");
        assert_eq!(seq.path(), "/mock/new_file_name.###.exr");
    }

    #[test]
    fn test_set_custom_frame_token() {
        let mut seq: Sequence = Sequence::new("/mock/path/file.1001.exr").unwrap();
        seq.set_custom_frame_token("<UDIM>");
        assert_eq!(seq.path(), "/mock/path/file.<UDIM>.exr");

        // A style change renders the slot again
        seq.set_padding_style(PaddingStyle::Printf);
        assert_eq!(seq.path(), "/mock/path/file.%04d.exr");
    }

    #[test]
    fn test_abstract_path() {
        let seq: Sequence = Sequence::new("/mock/file_name.101.exr").unwrap();
        assert_eq!(seq.abstract_path(), "/mock/file_name.$FRAME.exr");

        let seq: Sequence = Sequence::new("/mock/file_name.exr").unwrap();
        assert_eq!(seq.abstract_path(), "/mock/file_name.exr");
    }

    #[test]
    fn test_udim_token() {
        let seq: Sequence = Sequence::new("/tex/color.<UDIM>.tx").unwrap();
        assert_eq!(seq.padding(), 4);
        assert!(seq.frames().is_empty());
        assert_eq!(seq.padding_style(), PaddingStyle::Udim);
        assert_eq!(seq.path(), "/tex/color.<UDIM>.tx");
        assert_eq!(seq.format_at_frame(1012), "/tex/color.1012.tx");
    }

    #[test]
    fn test_switch_to_udim_forces_width() {
        let mut seq: Sequence = Sequence::new("/tex/color.10.tx").unwrap();
        assert_eq!(seq.padding(), 2);

        seq.set_padding_style(PaddingStyle::Udim);
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.path(), "/tex/color.<UDIM>.tx");
    }

    #[test]
    fn test_switch_to_udim_adds_frame_slot() {
        let mut seq: Sequence = Sequence::new("/mock/file.exr").unwrap();
        assert_eq!(seq.padding(), 0);

        seq.set_padding_style(PaddingStyle::Udim);
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.path(), "/mock/file.<UDIM>.exr");
    }

    #[test]
    fn test_udim_keeps_width_on_set_padding() {
        let mut seq: Sequence = Sequence::new("/tex/color.<UDIM>.tx").unwrap();
        seq.set_padding(2);
        assert_eq!(seq.padding(), 4);

        seq.set_padding(0);
        assert_eq!(seq.padding(), 0);
        assert_eq!(seq.path(), "/tex/color.tx");
    }

    #[test]
    fn test_udim_keeps_width_on_merge() {
        let mut seq: Sequence = Sequence::new("/tex/c.<UDIM>.tx").unwrap();
        let narrow: Sequence = Sequence::new("/tex/c.12.tx").unwrap();

        seq.merge(&narrow).unwrap();
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.path(), "/tex/c.<UDIM>.tx");
        assert_eq!(seq.format_at_frame(12), "/tex/c.0012.tx");
    }

    #[test]
    fn test_set_padding_caps_width() {
        let mut seq: Sequence = Sequence::new("/mock/file.1001.exr").unwrap();
        seq.set_padding(usize::MAX);
        assert_eq!(seq.padding(), MAX_PADDING);
        assert_eq!(seq.format_at_frame(1).len(), "/mock/file..exr".len() + MAX_PADDING);
    }

    #[test]
    fn test_over_wide_printf_does_not_parse() {
        let result: Result<Sequence, SequenceError> =
            Sequence::with_padding_style("/mock/file.%070000d.exr", PaddingStyle::Printf);
        assert!(matches!(result, Err(SequenceError::Parse { .. })));
    }

    #[test]
    fn test_houdini_wide_padding_round_trips() {
        let mut seq: Sequence = Sequence::new("/mock/shot.$F4.exr").unwrap();
        seq.set_padding(10);
        assert_eq!(seq.path(), "/mock/shot.$F10.exr");

        let parsed: Sequence = Sequence::new(&seq.path()).unwrap();
        assert_eq!(parsed.padding(), 10);
        assert_eq!(parsed.path(), seq.path());
    }

    #[test]
    fn test_paths_for_all_frames_offset_saturates() {
        let mut seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        seq.set_frames([1000]);
        assert_eq!(
            seq.paths_for_all_frames(i64::MAX),
            vec![format!("/mock/file.{}.exr", i64::MAX)]
        );
    }

    #[test]
    fn test_udim_overrides_caller_style() {
        let seq: Sequence =
            Sequence::with_padding_style("/tex/color.<UDIM>.tx", PaddingStyle::Printf).unwrap();
        assert_eq!(seq.padding_style(), PaddingStyle::Udim);
    }

    #[test]
    fn test_flame_range() {
        let mut seq: Sequence = Sequence::new("/plates/bg.[1001-1089].dpx").unwrap();
        assert_eq!(seq.padding_style(), PaddingStyle::Flame);
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.frames(), frames(&[1001, 1089]));
        assert_eq!(seq.path(), "/plates/bg.[1001-1089].dpx");

        seq.set_frames(1001..=1010);
        assert_eq!(seq.path(), "/plates/bg.[1001-1010].dpx");
        assert_eq!(seq.format_at_frame(1005), "/plates/bg.1005.dpx");
    }

    #[test]
    fn test_two_bracket_groups() {
        let seq: Sequence = Sequence::new("/mock/name.[30-40].[10-20].ext").unwrap();
        assert_eq!(seq.name(), "name.[30-40]");
        assert_eq!(seq.frames(), frames(&[10, 20]));
        assert_eq!(seq.path(), "/mock/name.[30-40].[10-20].ext");
    }

    #[test]
    fn test_switch_numeric_to_flame() {
        let mut seq: Sequence = Sequence::new("/mock/file.0001.exr").unwrap();
        seq.extend_frames([2, 3]);
        seq.set_padding_style(PaddingStyle::Flame);
        assert_eq!(seq.path(), "/mock/file.[0001-0003].exr");
    }

    #[test]
    fn test_houdini_tokens() {
        let seq: Sequence = Sequence::new("/geo/sim.$F4.bgeo.sc").unwrap();
        assert_eq!(seq.padding_style(), PaddingStyle::Houdini);
        assert_eq!(seq.padding(), 4);
        assert_eq!(seq.extension(), ".bgeo.sc");
        assert_eq!(seq.path(), "/geo/sim.$F4.bgeo.sc");
        assert_eq!(seq.format_at_frame(12), "/geo/sim.0012.bgeo.sc");

        let seq: Sequence = Sequence::new("/geo/sim.$F.bgeo").unwrap();
        assert_eq!(seq.padding(), 1);
        assert_eq!(seq.path(), "/geo/sim.$F.bgeo");
    }

    #[test]
    fn test_houdini_fraction() {
        let seq: Sequence = Sequence::new("/geo/sim.$FF.bgeo").unwrap();
        assert_eq!(seq.padding_style(), PaddingStyle::HoudiniFraction);
        assert_eq!(seq.path(), "/geo/sim.$FF.bgeo");

        let frame: Frame = "1001.5".parse().unwrap();
        assert_eq!(seq.format_at_frame(frame), "/geo/sim.1001.5.bgeo");
    }

    #[test]
    fn test_hidden_file() {
        let seq: Sequence = Sequence::new("/mock/.hidden.1001.exr").unwrap();
        assert_eq!(seq.name(), ".hidden");
        assert_eq!(seq.path(), "/mock/.hidden.####.exr");
    }

    #[test]
    fn test_start_end() {
        let mut seq: Sequence = Sequence::new("/mock/file.####.exr").unwrap();
        assert!(seq.start().is_none());
        seq.set_frames([7, 3, 9]);
        assert_eq!(seq.start().unwrap(), &Frame::new(3));
        assert_eq!(seq.end().unwrap(), &Frame::new(9));
    }

    #[test]
    fn test_display_and_from_str() {
        let seq: Sequence = "/mock/file.1001.exr".parse().unwrap();
        assert_eq!(seq.to_string(), "/mock/file.####.exr");
    }

    #[test]
    fn test_round_trip_every_style() {
        let cases: Vec<(PaddingStyle, Vec<usize>)> = vec![
            (PaddingStyle::Printf, (1..=12).chain([MAX_PADDING]).collect()),
            (PaddingStyle::Hash, (1..=12).chain([MAX_PADDING]).collect()),
            (PaddingStyle::At, (1..=12).collect()),
            (PaddingStyle::custom('*').unwrap(), (1..=12).collect()),
            (PaddingStyle::Houdini, (1..=12).chain([MAX_PADDING]).collect()),
            (PaddingStyle::Flame, (1..=6).collect()),
            (PaddingStyle::Udim, vec![4]),
        ];

        for (style, widths) in cases {
            let options: SequenceOptions = SequenceOptions::default().with_padding_style(style);
            for width in widths {
                let mut source: Sequence =
                    Sequence::with_options("/mock/shot.1.exr", &options).unwrap();
                source.set_frames([1, 7]);
                source.set_padding(width);
                let rendered: String = source.path();

                let parsed: Sequence = Sequence::with_options(&rendered, &options).unwrap();
                assert_eq!(parsed.padding(), width, "{} width {}", style, width);
                assert_eq!(parsed.path(), rendered, "{} width {}", style, width);
            }
        }
    }

    #[test]
    fn test_round_trip_houdini_fraction() {
        let seq: Sequence = Sequence::new("/mock/shot.$FF.exr").unwrap();
        let parsed: Sequence = Sequence::new(&seq.path()).unwrap();
        assert_eq!(parsed.padding(), 1);
        assert_eq!(parsed.path(), seq.path());
    }
}
