//! Semantic packet model types.
//!
//! This module contains the representation of a packet layout after parsing.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parser
//! Bit ranges (these types)
//!     ↓ layout
//! Layout blocks (pixel geometry)
//!     ↓ export
//! draw.io XML
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when a bit range ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit range {start}-{end} ends before it starts")]
pub struct InvalidRange {
    /// The declared first bit.
    pub start: u32,
    /// The declared last bit.
    pub end: u32,
}

/// An inclusive span of bit positions within a packet, carrying a field label.
///
/// # Examples
///
/// ```
/// use bitplan_core::semantic::BitRange;
///
/// let range = BitRange::new(0, 15, "Source Port").unwrap();
/// assert_eq!(range.bit_length(), 16);
/// assert_eq!(range.label(), "Source Port");
///
/// assert!(BitRange::new(8, 7, "Backwards").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRange {
    start: u32,
    end: u32,
    label: String,
}

impl BitRange {
    /// Creates a new bit range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if `end < start`.
    pub fn new(start: u32, end: u32, label: impl Into<String>) -> Result<Self, InvalidRange> {
        if end < start {
            return Err(InvalidRange { start, end });
        }

        Ok(Self {
            start,
            end,
            label: label.into(),
        })
    }

    /// Returns the first bit of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Returns the last bit of the range (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns the field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of bits covered by the range.
    pub fn bit_length(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    /// Returns `true` if the first and last bit fall into different rows
    /// of `row_width` bits.
    pub fn spans_rows(&self, row_width: u32) -> bool {
        self.start / row_width != self.end / row_width
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}: \"{}\"", self.start, self.end, self.label)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_accepts_single_bit() {
        let range = BitRange::new(7, 7, "Flag").unwrap();

        assert_eq!(range.start(), 7);
        assert_eq!(range.end(), 7);
        assert_eq!(range.bit_length(), 1);
    }

    #[test]
    fn test_new_rejects_reversed() {
        let err = BitRange::new(16, 15, "Oops").unwrap_err();

        assert_eq!(err, InvalidRange { start: 16, end: 15 });
        assert_eq!(err.to_string(), "bit range 16-15 ends before it starts");
    }

    #[test]
    fn test_bit_length_full_u32_range() {
        let range = BitRange::new(0, u32::MAX, "Everything").unwrap();

        assert_eq!(range.bit_length(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_spans_rows() {
        assert!(!BitRange::new(0, 31, "Row").unwrap().spans_rows(32));
        assert!(BitRange::new(24, 39, "Wrapped").unwrap().spans_rows(32));
        assert!(!BitRange::new(32, 47, "Second").unwrap().spans_rows(32));
    }

    #[test]
    fn test_display() {
        let range = BitRange::new(8, 15, "Dest Port").unwrap();

        assert_eq!(range.to_string(), "8-15: \"Dest Port\"");
    }

    proptest! {
        #[test]
        fn prop_bit_length_matches_bounds(start in 0u32..10_000, len in 1u32..10_000) {
            let end = start + len - 1;
            let range = BitRange::new(start, end, "x").unwrap();

            prop_assert_eq!(range.bit_length(), u64::from(len));
        }
    }
}
