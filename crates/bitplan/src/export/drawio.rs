//! draw.io (`mxGraph`) export.
//!
//! The exporter first assembles a flat [`DocumentTree`]: the two reserved
//! cells followed by one vertex per [`LayoutBlock`], each pointing at its
//! parent by identifier. The tree is then serialized as a pretty-printed
//! XML document:
//!
//! ```text
//! mxfile
//!   diagram
//!     mxGraphModel
//!       root
//!         mxCell id="0"
//!         mxCell id="1" parent="0"
//!         mxCell id="cell_2" value=.. style=.. parent="1" vertex="1"
//!           mxGeometry x=.. y=.. width=.. height=.. as="geometry"
//! ```

mod document;
mod writer;

pub use document::{Cell, DocumentTree};

use std::fmt;

use log::{debug, info};

use bitplan_core::color::Color;

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    layout::LayoutBlock,
};

const DEFAULT_FILL_COLOR: &str = "#f5f5f5";
const DEFAULT_STROKE_COLOR: &str = "#666666";
const DEFAULT_FONT_COLOR: &str = "#333333";

/// The style applied to every generated cell.
///
/// # Examples
///
/// ```
/// # use bitplan::export::drawio::CellStyle;
/// assert_eq!(
///     CellStyle::default().to_string(),
///     "rounded=0;whiteSpace=wrap;html=1;fillColor=#f5f5f5;strokeColor=#666666;fontColor=#333333;"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    rounded: bool,
    fill_color: Color,
    stroke_color: Color,
    font_color: Color,
}

impl CellStyle {
    /// Builds a style from configuration, using defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a configured color is invalid.
    pub fn from_config(config: &StyleConfig) -> Result<Self, export::Error> {
        let defaults = Self::default();

        Ok(Self {
            rounded: config.rounded(),
            fill_color: config
                .fill_color()
                .map_err(export::Error::Style)?
                .unwrap_or(defaults.fill_color),
            stroke_color: config
                .stroke_color()
                .map_err(export::Error::Style)?
                .unwrap_or(defaults.stroke_color),
            font_color: config
                .font_color()
                .map_err(export::Error::Style)?
                .unwrap_or(defaults.font_color),
        })
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            rounded: false,
            fill_color: Color::new(DEFAULT_FILL_COLOR).expect("default fill color is valid"),
            stroke_color: Color::new(DEFAULT_STROKE_COLOR).expect("default stroke color is valid"),
            font_color: Color::new(DEFAULT_FONT_COLOR).expect("default font color is valid"),
        }
    }
}

impl fmt::Display for CellStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rounded={};whiteSpace=wrap;html=1;fillColor={};strokeColor={};fontColor={};",
            u8::from(self.rounded),
            self.fill_color.to_style_value(),
            self.stroke_color.to_style_value(),
            self.font_color.to_style_value(),
        )
    }
}

/// Builder for a [`Drawio`] exporter.
#[derive(Debug, Default)]
pub struct DrawioBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> DrawioBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use colors and corner style from `style`.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if the style configuration holds an
    /// invalid color.
    pub fn build(self) -> Result<Drawio, export::Error> {
        let style = match self.style {
            Some(config) => CellStyle::from_config(config)?,
            None => CellStyle::default(),
        };

        debug!(style:% = style; "draw.io exporter configured");
        Ok(Drawio { style })
    }
}

/// Exporter producing draw.io XML text.
#[derive(Debug, Clone, Default)]
pub struct Drawio {
    style: CellStyle,
}

impl Drawio {
    /// Builds the document tree for `blocks` without serializing it.
    pub fn document(&self, blocks: &[LayoutBlock]) -> DocumentTree {
        DocumentTree::from_blocks(blocks, &self.style.to_string())
    }

    /// Renders `blocks` as a complete draw.io document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the XML writer fails.
    pub fn render(&self, blocks: &[LayoutBlock]) -> Result<String, export::Error> {
        let tree = self.document(blocks);
        let xml = writer::write_document(&tree)?;

        info!(cells_count = tree.cells().len(); "draw.io document rendered");
        Ok(xml)
    }
}

impl Exporter for Drawio {
    fn export(&self, blocks: &[LayoutBlock]) -> Result<String, export::Error> {
        self.render(blocks)
    }
}

/// Renders `blocks` with the default cell style.
///
/// # Errors
///
/// Returns [`export::Error::Render`] if the XML writer fails.
pub fn generate(blocks: &[LayoutBlock]) -> Result<String, export::Error> {
    Drawio::default().render(blocks)
}
