//! Discovery of sequence frames on disk.
//!
//! A sequence parsed from one path knows nothing about its siblings. The
//! scanner lists the sequence's directory, keeps the files that belong to the
//! same family and merges their frames back into the sequence.

use image_sequence_common::{join_path, FRAME_SENTINEL};
use image_sequence_filesystem::{DirectoryEntry, DirectoryLister, FamilyFilter};

use crate::error::SequenceError;
use crate::options::SequenceOptions;
use crate::sequence::Sequence;
use crate::style::NamePattern;

impl Sequence {
    /// Find the frames of this sequence in its directory.
    ///
    /// Every regular file in the directory that parses into the same family
    /// (equal [`Sequence::abstract_path`]) contributes its frames. The padding
    /// becomes the smallest padding among those files.
    ///
    /// # Arguments
    /// * `lister` - Directory access
    ///
    /// # Returns
    /// `true` if at least one matching file was found. Sequences without a
    /// directory or without a frame slot are never searched. Listing failures
    /// are logged and reported as `false`.
    pub fn find_frames_on_disk(&mut self, lister: &dyn DirectoryLister) -> bool {
        let fragments: Vec<Sequence> = match self.matching_fragments(lister) {
            Ok(fragments) => fragments,
            Err(e) => {
                log::warn!("Could not scan {} for frames: {}", self.directory(), e);
                return false;
            }
        };

        let padding: usize = match fragments.iter().map(Sequence::padding).min() {
            Some(padding) => padding,
            None => return false,
        };

        for fragment in &fragments {
            self.absorb(fragment);
        }
        self.assign_padding(padding);
        self.refresh_frame_token();

        log::debug!(
            "Found {} files for {} ({} frames)",
            fragments.len(),
            self.path(),
            self.len()
        );
        true
    }

    /// Check whether the sequence exists on disk.
    ///
    /// # Arguments
    /// * `lister` - Directory access
    ///
    /// # Returns
    /// With frames, whether every frame's file exists. With a frame slot but
    /// no frames, whether any file of the family exists. Without a frame slot,
    /// whether the path itself exists.
    ///
    /// # Errors
    /// Returns `SequenceError::FileSystem` if the directory cannot be listed.
    pub fn exists(&self, lister: &dyn DirectoryLister) -> Result<bool, SequenceError> {
        if !self.has_frame() {
            return Ok(lister.path_exists(&self.path()));
        }

        if !self.is_empty() {
            return Ok(self
                .paths_for_all_frames(0)
                .iter()
                .all(|path| lister.path_exists(path)));
        }

        Ok(!self.matching_fragments(lister)?.is_empty())
    }

    /// Parse every file in the directory that belongs to this family.
    fn matching_fragments(
        &self,
        lister: &dyn DirectoryLister,
    ) -> Result<Vec<Sequence>, SequenceError> {
        if self.directory().is_empty() || !self.has_frame() {
            return Ok(Vec::new());
        }

        // Files on disk always follow the grammar order, whatever the render order
        let grammar_order: NamePattern = NamePattern::default();
        let template: String = self.abstract_basename_with(&grammar_order);
        let filter: FamilyFilter = FamilyFilter::from_template(&template, FRAME_SENTINEL)?;

        let identity: String = self.abstract_path();
        let entries: Vec<DirectoryEntry> = lister.list_entries(self.directory())?;

        let fragments: Vec<Sequence> = entries
            .into_iter()
            .filter(|entry| entry.is_file && filter.matches(&entry.name))
            .filter_map(|entry| self.parse_fragment(&entry.name))
            .filter(|fragment| fragment.abstract_path() == identity)
            .collect();

        Ok(fragments)
    }

    fn parse_fragment(&self, file_name: &str) -> Option<Sequence> {
        let path: String = join_path(self.directory(), file_name);
        let mut fragment: Sequence = Sequence::try_parse_with_options(&path, self.options())?;
        fragment.set_name_pattern(self.name_pattern().clone());
        Some(fragment)
    }
}

/// Parse a path and look for the rest of its sequence on disk.
///
/// # Arguments
/// * `path` - Path of any file of the sequence, or a sequence pattern
/// * `options` - Grammar and rendering configuration
/// * `lister` - Directory access
///
/// # Returns
/// The sequence if frames were found or the path itself exists, otherwise
/// `None`. Unparsable paths also give `None`.
///
/// # Example
///
/// ```no_run
/// use image_sequence::{find_sequence_on_disk, LocalDirectoryLister, SequenceOptions};
///
/// let lister = LocalDirectoryLister::new();
/// if let Some(seq) = find_sequence_on_disk("/shots/sh010/plate.1001.exr", &SequenceOptions::default(), &lister) {
///     println!("{} has {} frames", seq.path(), seq.len());
/// }
/// ```
pub fn find_sequence_on_disk(
    path: &str,
    options: &SequenceOptions,
    lister: &dyn DirectoryLister,
) -> Option<Sequence> {
    let mut seq: Sequence = Sequence::try_parse_with_options(path, options)?;
    if seq.find_frames_on_disk(lister) || lister.path_exists(path) {
        Some(seq)
    } else {
        log::debug!("No files found for {}", path);
        None
    }
}
