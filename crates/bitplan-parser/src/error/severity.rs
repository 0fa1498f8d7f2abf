//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Lenient parsing reports suspicious lines as [`Severity::Warning`] and
/// skips them; strict parsing reports them as [`Severity::Error`] and fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal error that makes strict parsing fail.
    Error,

    /// A non-fatal warning; the offending line is skipped.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
