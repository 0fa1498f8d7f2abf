//! Error codes for the bitplan diagnostic system.
//!
//! Codes are only attached to lines that matched the `start-end: label`
//! shape; lines of any other shape are ignored without a diagnostic.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Bit offset out of range.
    ///
    /// A start or end offset does not fit in an unsigned 32-bit integer.
    E001,

    /// Reversed bit range.
    ///
    /// The end offset of a range is smaller than its start offset.
    E002,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
