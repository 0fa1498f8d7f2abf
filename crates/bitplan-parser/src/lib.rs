//! # Bitplan Parser
//!
//! Parser for packet bit-layout descriptions: lines of the form
//! `start-end: label` or `start-end: "label"`, as used by Mermaid
//! `packet-beta` diagrams.
//!
//! ## Usage
//!
//! ```
//! # use bitplan_parser::{parse, parse_with, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         packet-beta
//!         title TCP
//!         0-15: "Source Port"
//!         16-31: "Destination Port"
//!     "#;
//!
//!     // Lenient parsing: non-matching lines are skipped.
//!     let ranges = parse(source);
//!     assert_eq!(ranges.len(), 2);
//!
//!     // Strict parsing: suspicious lines make the whole parse fail.
//!     let parsed = parse_with(source, ParseConfig::new().with_strict(true))?;
//!     assert_eq!(parsed.ranges(), ranges.as_slice());
//!     Ok(())
//! }
//! ```

pub mod error;
mod parser;
mod span;

pub use span::{Span, Spanned};

use bitplan_core::semantic::BitRange;

use error::{Diagnostic, ParseError, Severity};
use parser::LineParser;

/// Configuration for the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    strict: bool,
}

impl ParseConfig {
    /// Creates the default, lenient configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matched lines with unusable offsets fail the parse.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns `true` if strict parsing is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn severity(&self) -> Severity {
        if self.strict {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

/// The result of a successful parse: the bit ranges in input order plus any
/// warnings about skipped lines.
#[derive(Debug, Default)]
pub struct ParsedSource {
    ranges: Vec<BitRange>,
    warnings: Vec<Diagnostic>,
}

impl ParsedSource {
    /// Returns the bit ranges in input order.
    pub fn ranges(&self) -> &[BitRange] {
        &self.ranges
    }

    /// Returns the warnings about matched lines that were skipped.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns `true` if no bit range was found.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Consumes the result, returning the bit ranges.
    pub fn into_ranges(self) -> Vec<BitRange> {
        self.ranges
    }
}

/// Parse source text into bit ranges, skipping every line that does not match.
///
/// This never fails: input without a single `start-end: label` line yields
/// an empty vector. Matched lines with out-of-range or reversed offsets are
/// skipped as well; use [`parse_with`] to see why.
///
/// # Example
///
/// ```
/// # use bitplan_parser::parse;
/// let ranges = parse("0-7: \"Source Port\"\n8-15: Dest Port\n");
///
/// assert_eq!(ranges[0].label(), "Source Port");
/// assert_eq!(ranges[1].start(), 8);
/// ```
pub fn parse(source: &str) -> Vec<BitRange> {
    let mut parser = LineParser::new(Severity::Warning);
    parser.parse_source(source);
    parser
        .finish()
        .map(|(ranges, _warnings)| ranges)
        .unwrap_or_default()
}

/// Parse source text into bit ranges, reporting diagnostics.
///
/// # Errors
///
/// In strict mode, returns a [`ParseError`] holding one diagnostic per
/// matched line whose offsets do not fit in 32 bits or are reversed. In
/// lenient mode those diagnostics are returned as warnings and the call
/// always succeeds.
pub fn parse_with(source: &str, config: ParseConfig) -> Result<ParsedSource, ParseError> {
    let mut parser = LineParser::new(config.severity());
    parser.parse_source(source);

    let (ranges, warnings) = parser.finish()?;
    Ok(ParsedSource { ranges, warnings })
}
