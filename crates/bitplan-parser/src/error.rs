//! Error and diagnostic system for the bitplan parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source text
//! - Severity levels (lenient parsing reports warnings, strict parsing errors)
//! - Diagnostic collector for accumulating every problem of an input
//!
//! # Example
//!
//! ```
//! # use bitplan_parser::error::{Diagnostic, ErrorCode};
//! # use bitplan_parser::Span;
//!
//! let diag = Diagnostic::warning("reversed bit range `15-8`")
//!     .with_code(ErrorCode::E002)
//!     .with_label(Span::new(3..4), "smaller than the start offset")
//!     .with_help("did you mean `8-15`?");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
