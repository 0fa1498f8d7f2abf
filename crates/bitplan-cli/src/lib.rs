//! CLI logic for the bitplan packet diagram tool.
//!
//! This module contains the core CLI logic: loading configuration, running
//! the conversion pipeline, and writing the draw.io file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf};

use log::{info, warn};

use bitplan::{
    BitplanError, DiagramBuilder, config::ParserConfig, export::drawio::DrawioBuilder,
};

use error_adapter::render_warning;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A diagram was written to the given path.
    Written(PathBuf),
    /// The input held no bit range; nothing was written.
    Empty,
}

/// Run the bitplan CLI application
///
/// This function processes the input file through the bitplan pipeline
/// and writes the resulting draw.io document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BitplanError` for:
/// - Input file read errors
/// - Configuration loading errors
/// - Parsing errors in strict mode
/// - Rendering errors
/// - Output file write errors
pub fn run(args: &Args) -> Result<Outcome, BitplanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing packet description"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = app_config.with_parser(ParserConfig::new(true));
    }
    // Style colors are checked before any input is read.
    DrawioBuilder::new()
        .with_style(app_config.style())
        .build()?;

    let source =
        fs::read_to_string(&args.input).map_err(|err| BitplanError::input(&args.input, err))?;

    let builder = DiagramBuilder::new(app_config);
    let parsed = builder.parse(&source)?;

    for warning in parsed.warnings() {
        warn!("{}", render_warning(warning, &source));
    }

    if parsed.is_empty() {
        warn!("No packet blocks found. Ensure format is 'start-end: label'");
        return Ok(Outcome::Empty);
    }

    let blocks = builder.layout(parsed.ranges());
    let xml = builder.render_drawio(&blocks)?;

    fs::write(&args.output, xml).map_err(|err| BitplanError::output(&args.output, err))?;

    info!(
        output_path = args.output,
        blocks_count = blocks.len();
        "Success! Saved to {}", args.output
    );
    info!("Open the file in draw.io or at https://app.diagrams.net/");

    Ok(Outcome::Written(PathBuf::from(&args.output)))
}
