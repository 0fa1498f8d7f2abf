//! Configuration types for bitplan diagram generation.
//!
//! This module provides configuration structures that control how packet
//! layouts are parsed, laid out and styled. All types implement
//! [`serde::Deserialize`] for loading from external sources; every section
//! and field is optional and falls back to the built-in defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Pixel size of one bit cell.
//! - [`StyleConfig`] - Colors and corner style of the generated cells.
//! - [`ParserConfig`] - Whether suspicious lines fail the conversion.
//!
//! # Example
//!
//! ```
//! # use bitplan::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().cell_width(), 20);
//! assert!(config.style().fill_color().unwrap().is_none());
//! assert!(!config.parser().strict());
//! ```

use serde::Deserialize;

use bitplan_core::{
    color::Color,
    geometry::{CELL_HEIGHT, CELL_WIDTH, Grid},
};
use bitplan_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, parser: ParserConfig) -> Self {
        Self {
            layout,
            style,
            parser,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Replaces the parser configuration section.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

/// Size of the grid cells a bit is drawn in.
///
/// The row width stays fixed at 32 bits and is not configurable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixel width of one bit.
    cell_width: u32,

    /// Pixel height of one row.
    cell_height: u32,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Returns the pixel width of one bit.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Returns the pixel height of one row.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Returns the [`Grid`] used by the layout engine.
    pub fn grid(&self) -> Grid {
        Grid::default()
            .with_cell_width(self.cell_width)
            .with_cell_height(self.cell_height)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(CELL_WIDTH, CELL_HEIGHT)
    }
}

/// Visual styling configuration for generated cells.
///
/// Colors are CSS color strings. Fields that are not set fall back to the
/// exporter defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    fill_color: Option<String>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    font_color: Option<String>,

    /// Draw cells with rounded corners.
    #[serde(default)]
    rounded: bool,
}

impl StyleConfig {
    /// Returns the parsed fill [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn fill_color(&self) -> Result<Option<Color>, String> {
        parse_color("fill_color", self.fill_color.as_deref())
    }

    /// Returns the parsed stroke [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Option<Color>, String> {
        parse_color("stroke_color", self.stroke_color.as_deref())
    }

    /// Returns the parsed font [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn font_color(&self) -> Result<Option<Color>, String> {
        parse_color("font_color", self.font_color.as_deref())
    }

    /// Returns `true` if cells should have rounded corners.
    pub fn rounded(&self) -> bool {
        self.rounded
    }
}

fn parse_color(field: &str, color: Option<&str>) -> Result<Option<Color>, String> {
    color
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Parser configuration.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct ParserConfig {
    /// Fail on matched lines with reversed or out-of-range offsets.
    #[serde(default)]
    strict: bool,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`].
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns `true` if strict parsing is enabled.
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub(crate) fn parse_config(self) -> ParseConfig {
        ParseConfig::new().with_strict(self.strict)
    }
}
