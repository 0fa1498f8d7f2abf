//! Source spans annotated with a short message.

use crate::span::Span;

/// Whether a label marks the offending text or only points at related text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Primary,
    Secondary,
}

/// A message attached to a span of the source.
///
/// A reversed range `15-8` carries a primary label on `8`, the offset that
/// is out of order, and a secondary label on `15`, the offset it is compared
/// against.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    role: Role,
}

impl Label {
    /// Label the text the diagnostic is about.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Primary)
    }

    /// Label text that explains the primary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Secondary)
    }

    fn with_role(span: Span, message: impl Into<String>, role: Role) -> Self {
        Self {
            span,
            message: message.into(),
            role,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.role == Role::Primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roles() {
        let end = Label::primary(Span::new(3..4), "smaller than the start offset");
        let start = Label::secondary(Span::new(0..2), "range starts here");

        assert!(end.is_primary());
        assert_eq!(end.span(), Span::new(3..4));
        assert_eq!(end.message(), "smaller than the start offset");
        assert!(!start.is_primary());
        assert_eq!(start.message(), "range starts here");
    }
}
