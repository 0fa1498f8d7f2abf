//! Error types for bitplan operations.
//!
//! This module provides the main error type [`BitplanError`] which wraps
//! the error conditions that can occur while converting a packet layout.

use std::{io, path::PathBuf};

use thiserror::Error;

use bitplan_parser::error::ParseError;

use crate::export;

/// The main error type for bitplan operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant is only produced by strict parsing. It carries the
/// source text so that every diagnostic can be rendered with a snippet.
#[derive(Debug, Error)]
pub enum BitplanError {
    #[error("Failed to read input `{}`: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output `{}`: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<export::Error> for BitplanError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::Style(msg) => Self::Config(msg),
            other => Self::Export(Box::new(other)),
        }
    }
}

impl BitplanError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Input` error for the file at `path`.
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    /// Create a new `Output` error for the file at `path`.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use bitplan_parser::error::Diagnostic;

    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = BitplanError::input(
            "missing.pkt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        assert_eq!(
            err.to_string(),
            "Failed to read input `missing.pkt`: not found"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let err = BitplanError::new_parse_error(
            Diagnostic::error("reversed bit range `15-8`").into(),
            "15-8: x",
        );

        match &err {
            BitplanError::Parse { src, .. } => assert_eq!(src, "15-8: x"),
            other => panic!("Expected Parse, got {other:?}"),
        }
        assert_eq!(err.to_string(), "error: reversed bit range `15-8`");
    }

    #[test]
    fn test_style_error_is_config_error() {
        let err: BitplanError = export::Error::Style("invalid color `x`".to_string()).into();
        assert!(matches!(err, BitplanError::Config(_)));

        let err: BitplanError = export::Error::Render("boom".to_string()).into();
        assert_eq!(err.to_string(), "Export error: Render error: boom");
    }
}
