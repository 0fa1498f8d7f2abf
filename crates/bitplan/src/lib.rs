//! Bitplan - convert packet bit-layout descriptions into draw.io diagrams.
//!
//! Parsing, layout, and rendering for Mermaid `packet-beta` style
//! descriptions. Each `start-end: label` line becomes one labelled box on a
//! 32-bit wide grid in a draw.io document.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use bitplan_core::{color, geometry, identifier, semantic};
pub use bitplan_parser::ParsedSource;

pub use error::BitplanError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::{Exporter, drawio::DrawioBuilder};
use layout::{LayoutBlock, LayoutEngine};
use semantic::BitRange;

/// Builder for parsing and rendering packet diagrams.
///
/// This provides an API for processing packet descriptions through parsing,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```
/// use bitplan::{DiagramBuilder, config::AppConfig};
///
/// let source = "0-15: \"Source Port\"\n16-31: \"Destination Port\"\n";
///
/// // With custom config
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Run the stages one by one
/// let parsed = builder.parse(source).expect("Failed to parse");
/// let blocks = builder.layout(parsed.ranges());
/// let xml = builder.render_drawio(&blocks).expect("Failed to render");
/// assert!(xml.contains("Destination Port"));
///
/// // Or the whole pipeline at once
/// let xml = DiagramBuilder::default().convert(source).expect("Failed to convert");
/// assert!(xml.is_some());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, style and parser settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into bit ranges.
    ///
    /// Lines that are not of the form `start-end: label` are skipped.
    /// Matched lines with unusable offsets are reported as warnings, or as
    /// errors when the parser is configured as strict.
    ///
    /// # Errors
    ///
    /// Returns [`BitplanError::Parse`] in strict mode if any matched line
    /// has an offset that does not fit in 32 bits or a reversed range.
    pub fn parse(&self, source: &str) -> Result<ParsedSource, BitplanError> {
        info!(strict = self.config.parser().strict(); "Parsing packet description");

        let parsed = bitplan_parser::parse_with(source, self.config.parser().parse_config())
            .map_err(|err| BitplanError::new_parse_error(err, source))?;

        debug!(
            ranges_count = parsed.ranges().len(),
            warnings_count = parsed.warnings().len();
            "Packet description parsed"
        );
        trace!(ranges:? = parsed.ranges(); "Parsed bit ranges");

        Ok(parsed)
    }

    /// Compute one block per bit range, in order.
    pub fn layout(&self, ranges: &[BitRange]) -> Vec<LayoutBlock> {
        LayoutEngine::new(self.config.layout().grid()).layout(ranges)
    }

    /// Render laid-out blocks to a draw.io document.
    ///
    /// # Errors
    ///
    /// Returns [`BitplanError::Config`] if the style configuration holds an
    /// invalid color, or [`BitplanError::Export`] if serialization fails.
    pub fn render_drawio(&self, blocks: &[LayoutBlock]) -> Result<String, BitplanError> {
        let exporter = DrawioBuilder::new()
            .with_style(self.config.style())
            .build()?;

        let xml = exporter.export(blocks)?;
        info!(blocks_count = blocks.len(); "draw.io document generated");

        Ok(xml)
    }

    /// Run the whole pipeline on `source`.
    ///
    /// Returns `Ok(None)` if the source contains no bit range at all.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`parse`](Self::parse) and
    /// [`render_drawio`](Self::render_drawio).
    pub fn convert(&self, source: &str) -> Result<Option<String>, BitplanError> {
        let parsed = self.parse(source)?;

        for diagnostic in parsed.warnings() {
            warn!(diagnostic:%; "Skipped bit range");
        }

        if parsed.is_empty() {
            warn!("No packet blocks found");
            return Ok(None);
        }

        let blocks = self.layout(parsed.ranges());
        self.render_drawio(&blocks).map(Some)
    }
}
