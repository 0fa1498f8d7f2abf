//! Line grammar for packet bit-layout descriptions.
//!
//! Every line of the source is matched on its own against
//!
//! ```text
//! line   = ws* offset "-" offset ":" ws* label
//! label  = '"' [^"]* '"' ws* EOL
//!        | rest-of-line          (trailing whitespace trimmed, non-empty)
//! offset = [0-9]+
//! ```
//!
//! Lines that do not match are not an error: titles, directives and
//! comments of the surrounding diagram language are expected and skipped.
//! Lines that match but carry unusable offsets produce a [`Diagnostic`].

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, delimited, eof, preceded, terminated},
    error::{ContextError, ModalResult, StrContext},
    stream::LocatingSlice,
    token::{rest, take_till, take_while},
};

use bitplan_core::semantic::BitRange;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Severity},
    span::{Span, Spanned},
};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = ModalResult<O, ContextError>;

/// A line that matched the grammar, before its offsets are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RangeLine<'src> {
    pub start: Spanned<&'src str>,
    pub end: Spanned<&'src str>,
    pub label: &'src str,
}

fn is_whitespace(c: char) -> bool {
    // A leading byte-order mark counts as whitespace.
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse zero or more whitespace characters
fn whitespace0(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., is_whitespace).void().parse_next(input)
}

/// Parse a run of decimal digits, keeping its line-relative span
fn bit_offset<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    digit1
        .with_span()
        .map(|(digits, range)| Spanned::new(digits, Span::new(range)))
        .context(StrContext::Label("bit offset"))
        .parse_next(input)
}

/// Parse `"label"` followed by nothing but whitespace
fn quoted_label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    terminated(
        delimited('"', take_till(0.., '"'), '"'),
        (whitespace0, eof),
    )
    .parse_next(input)
}

/// Parse the rest of the line as a label
///
/// A label that is blank after trimming does not match, so `0-7:   ` is
/// skipped like any other non-matching line. Use `0-7: ""` for an empty
/// label.
fn bare_label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    rest.map(str::trim_end)
        .verify(|label: &str| !label.is_empty())
        .parse_next(input)
}

fn label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((quoted_label, bare_label))
        .context(StrContext::Label("label"))
        .parse_next(input)
}

/// Parse a complete `start-end: label` line
pub(crate) fn range_line<'src>(input: &mut Input<'src>) -> IResult<RangeLine<'src>> {
    (
        preceded(whitespace0, bit_offset),
        preceded('-', bit_offset),
        preceded((':', whitespace0), label),
    )
        .map(|(start, end, label)| RangeLine { start, end, label })
        .parse_next(input)
}

/// Parser that accumulates bit ranges and diagnostics over the lines of a source.
pub(crate) struct LineParser {
    ranges: Vec<BitRange>,
    diagnostics: DiagnosticCollector,
    severity: Severity,
}

impl LineParser {
    /// Create a parser reporting problems with the given severity.
    pub(crate) fn new(severity: Severity) -> Self {
        Self {
            ranges: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
            severity,
        }
    }

    /// Parse every line of `source`, in order.
    pub(crate) fn parse_source(&mut self, source: &str) {
        let mut line_offset = 0;

        for (idx, line) in source.split('\n').enumerate() {
            let mut input = LocatingSlice::new(line);

            match range_line(&mut input) {
                Ok(matched) => self.accept(matched, line_offset),
                Err(_) => trace!(line_number = idx + 1; "Skipping non-matching line"),
            }

            line_offset += line.len() + 1;
        }

        debug!(
            ranges_count = self.ranges.len(),
            severity:% = self.severity;
            "Parsed bit ranges"
        );
    }

    /// Finish parsing and return the ranges with any warnings, or the
    /// collected errors.
    pub(crate) fn finish(self) -> Result<(Vec<BitRange>, Vec<Diagnostic>), ParseError> {
        let ranges = self.ranges;
        self.diagnostics.finish().map(|warnings| (ranges, warnings))
    }

    fn accept(&mut self, line: RangeLine<'_>, line_offset: usize) {
        match self.bit_range(line, line_offset) {
            Ok(range) => {
                trace!(range:% = range; "Matched bit range");
                self.ranges.push(range);
            }
            Err(diagnostic) => self.diagnostics.emit(diagnostic),
        }
    }

    /// Validate the offsets of a matched line.
    fn bit_range(&self, line: RangeLine<'_>, line_offset: usize) -> Result<BitRange, Diagnostic> {
        let start = self.offset_value(line.start, line_offset)?;
        let end = self.offset_value(line.end, line_offset)?;

        BitRange::new(start, end, line.label).map_err(|err| {
            let start_span = line.start.span().shift(line_offset);
            let end_span = line.end.span().shift(line_offset);

            Diagnostic::new(
                self.severity,
                format!("reversed bit range `{}-{}`", err.start, err.end),
            )
            .with_code(ErrorCode::E002)
            .with_label(end_span, "smaller than the start offset")
            .with_secondary_label(start_span, "range starts here")
            .with_help(format!("did you mean `{}-{}`?", err.end, err.start))
        })
    }

    fn offset_value(&self, digits: Spanned<&str>, line_offset: usize) -> Result<u32, Diagnostic> {
        digits.inner().parse::<u32>().map_err(|_| {
            Diagnostic::new(
                self.severity,
                format!("bit offset `{}` does not fit in 32 bits", digits.inner()),
            )
            .with_code(ErrorCode::E001)
            .with_label(digits.span().shift(line_offset), "out of range")
            .with_help(format!("bit offsets must be at most {}", u32::MAX))
        })
    }
}
