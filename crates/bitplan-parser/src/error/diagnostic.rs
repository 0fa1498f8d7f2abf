//! The core diagnostic type for the bitplan error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, multiple labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A warning or error about one matched line of the source.
///
/// Rendered by the CLI as:
///
/// ```text
/// warning[E002]: reversed bit range `15-8`
///  --> 3:4
///   |
/// 3 | 15-8: "Flags"
///   | ── ┬ smaller than the start offset
///   | ╰── range starts here
///   |
///   = help: did you mean `8-15`?
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// ```
    /// # use bitplan_parser::{Span, error::{Diagnostic, ErrorCode}};
    /// let diag = Diagnostic::error("bit offset `4294967296` does not fit in 32 bits")
    ///     .with_code(ErrorCode::E001)
    ///     .with_label(Span::new(0..10), "out of range");
    ///
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    ///
    /// ```
    /// # use bitplan_parser::{Span, error::Diagnostic};
    /// let diag = Diagnostic::warning("reversed bit range `15-8`")
    ///     .with_label(Span::new(3..4), "smaller than the start offset")
    ///     .with_secondary_label(Span::new(0..2), "range starts here")
    ///     .with_help("did you mean `8-15`?");
    ///
    /// assert_eq!(diag.labels().len(), 2);
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were added.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a primary label pointing at the offending text.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Attach a secondary label pointing at related text.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Create a new diagnostic with the given severity and message.
    pub(crate) fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
