//! Exact frame numbers.
//!
//! Frames are either integers or decimals such as `1001.25` (sub-frame
//! renders, motion blur samples). The fractional digits are kept as text so a
//! frame always renders back exactly as it was read. Only the integer part is
//! ever zero-padded.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use image_sequence_common::MAX_PADDING;

use crate::error::SequenceError;

/// A frame number: a signed integer part plus optional fractional digits.
///
/// Equality, ordering and hashing are numeric, so `17.9` and `17.90` are the
/// same frame. The textual form of whichever value was stored first is kept.
#[derive(Debug, Clone)]
pub struct Frame {
    whole: i64,
    fraction: Option<String>,
}

impl Frame {
    /// Create an integer frame.
    ///
    /// # Arguments
    /// * `whole` - Frame number
    pub fn new(whole: i64) -> Self {
        Self {
            whole,
            fraction: None,
        }
    }

    /// Create a decimal frame.
    ///
    /// # Arguments
    /// * `whole` - Integer part
    /// * `fraction` - Digits after the decimal point, kept verbatim
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidFrame` if `fraction` is empty or
    /// contains anything other than ASCII digits.
    pub fn with_fraction(whole: i64, fraction: &str) -> Result<Self, SequenceError> {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SequenceError::InvalidFrame {
                value: format!("{}.{}", whole, fraction),
            });
        }
        Ok(Self {
            whole,
            fraction: Some(fraction.to_string()),
        })
    }

    /// Integer part of the frame.
    pub fn whole(&self) -> i64 {
        self.whole
    }

    /// Fractional digits, if this is a decimal frame.
    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Shift the integer part, keeping the fractional digits.
    ///
    /// The shift saturates at the bounds of `i64` instead of wrapping.
    ///
    /// # Arguments
    /// * `offset` - Amount added to the integer part
    pub fn offset(&self, offset: i64) -> Self {
        Self {
            whole: self.whole.saturating_add(offset),
            fraction: self.fraction.clone(),
        }
    }

    /// Render the frame with its integer part zero-padded.
    ///
    /// # Arguments
    /// * `width` - Minimum width of the integer part (sign included), capped
    ///   at `MAX_PADDING`
    ///
    /// # Returns
    /// `1001` at width 5 is `01001`, `17.90` at width 4 is `0017.90`.
    pub fn format_padded(&self, width: usize) -> String {
        let width: usize = width.min(MAX_PADDING);
        let mut rendered: String = format!("{:0width$}", self.whole, width = width);
        if let Some(fraction) = &self.fraction {
            rendered.push('.');
            rendered.push_str(fraction);
        }
        rendered
    }

    /// Fraction digits without trailing zeros, used for numeric comparison.
    fn significant_fraction(&self) -> &str {
        self.fraction
            .as_deref()
            .map(|f| f.trim_end_matches('0'))
            .unwrap_or("")
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frame {}

impl PartialOrd for Frame {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frame {
    fn cmp(&self, other: &Self) -> Ordering {
        self.whole.cmp(&other.whole).then_with(|| {
            // Digit strings without trailing zeros compare like the decimals they spell
            let by_fraction: Ordering = self
                .significant_fraction()
                .cmp(other.significant_fraction());
            if self.whole < 0 {
                by_fraction.reverse()
            } else {
                by_fraction
            }
        })
    }
}

impl Hash for Frame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.whole.hash(state);
        self.significant_fraction().hash(state);
    }
}

impl PartialEq<i64> for Frame {
    fn eq(&self, other: &i64) -> bool {
        self.whole == *other && self.significant_fraction().is_empty()
    }
}

impl From<i64> for Frame {
    fn from(whole: i64) -> Self {
        Self::new(whole)
    }
}

impl From<i32> for Frame {
    fn from(whole: i32) -> Self {
        Self::new(i64::from(whole))
    }
}

impl From<u32> for Frame {
    fn from(whole: u32) -> Self {
        Self::new(i64::from(whole))
    }
}

impl From<&Frame> for Frame {
    fn from(frame: &Frame) -> Self {
        frame.clone()
    }
}

impl FromStr for Frame {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SequenceError::InvalidFrame {
            value: s.to_string(),
        };

        let (whole_text, fraction): (&str, Option<&str>) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let digits: &str = whole_text.strip_prefix('-').unwrap_or(whole_text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: i64 = whole_text.parse().map_err(|_| invalid())?;

        match fraction {
            None => Ok(Self::new(whole)),
            // "-0.5" has no integer part to carry the sign
            Some(_) if whole == 0 && whole_text.starts_with('-') => Err(invalid()),
            Some(fraction) => Self::with_fraction(whole, fraction).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fraction {
            Some(fraction) => write!(f, "{}.{}", self.whole, fraction),
            None => write!(f, "{}", self.whole),
        }
    }
}
