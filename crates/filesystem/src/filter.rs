//! Glob pre-filter for sibling file names.
//!
//! A sequence family is described by a template such as `file.$FRAME.exr`.
//! Before each directory entry is parsed, its name is matched against the
//! glob `file.*.exr` built from that template. Everything outside the
//! placeholder is escaped, so names containing glob metacharacters
//! (`[`, `]`, `*`, `?`, `{`, `}`, `!`) match literally:
//!
//! ```
//! use image_sequence_filesystem::filter::FamilyFilter;
//!
//! let filter = FamilyFilter::from_template("plate[v1].$FRAME.exr", "$FRAME").unwrap();
//!
//! assert!(filter.matches("plate[v1].1001.exr"));
//! assert!(!filter.matches("platev.1001.exr"));
//! ```

use globset::{GlobBuilder, GlobMatcher};

use crate::error::FileSystemError;

/// Escape special glob characters in a string to treat it as a literal.
///
/// # Arguments
/// * `s` - String to escape
///
/// # Returns
/// A new string with all glob metacharacters escaped with backslashes.
///
/// # Example
/// ```
/// use image_sequence_filesystem::filter::escape_glob;
///
/// assert_eq!(escape_glob("file[1].exr"), r"file\[1\].exr");
/// assert_eq!(escape_glob("file.####.exr"), "file.####.exr");
/// ```
pub fn escape_glob(s: &str) -> String {
    let mut escaped: String = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '*' | '?' | '[' | ']' | '{' | '}' | '!' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Matches file names that could belong to one sequence family.
#[derive(Debug, Clone)]
pub struct FamilyFilter {
    /// The compiled glob pattern text.
    pattern: String,
    /// Compiled matcher.
    matcher: GlobMatcher,
}

impl FamilyFilter {
    /// Create a filter for names that start with `prefix` and end with `suffix`.
    ///
    /// # Arguments
    /// * `prefix` - Literal text before the variable part
    /// * `suffix` - Literal text after the variable part
    ///
    /// # Errors
    /// Returns error if the resulting pattern cannot be compiled.
    pub fn new(prefix: &str, suffix: &str) -> Result<Self, FileSystemError> {
        let pattern: String = format!("{}*{}", escape_glob(prefix), escape_glob(suffix));
        Self::compile(pattern)
    }

    /// Create a filter from a template containing a placeholder.
    ///
    /// The placeholder becomes a wildcard. A template without the placeholder
    /// matches only itself.
    ///
    /// # Arguments
    /// * `template` - File name with a placeholder in the variable position
    /// * `placeholder` - The placeholder text
    ///
    /// # Errors
    /// Returns error if the resulting pattern cannot be compiled.
    pub fn from_template(template: &str, placeholder: &str) -> Result<Self, FileSystemError> {
        match template.rfind(placeholder) {
            Some(idx) if !placeholder.is_empty() => {
                Self::new(&template[..idx], &template[idx + placeholder.len()..])
            }
            _ => Self::compile(escape_glob(template)),
        }
    }

    /// Check if a file name matches the family.
    ///
    /// # Arguments
    /// * `name` - File name without directory
    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Get the compiled pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn compile(pattern: String) -> Result<Self, FileSystemError> {
        let matcher: GlobMatcher = GlobBuilder::new(&pattern)
            .backslash_escape(true)
            .literal_separator(true)
            .build()
            .map_err(|e| FileSystemError::InvalidGlobPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?
            .compile_matcher();
        Ok(Self { pattern, matcher })
    }
}
