//! Command-line argument definitions for the bitplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, parser strictness, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the bitplan packet diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input packet description
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output draw.io file
    #[arg(short, long, default_value = "output.drawio")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail on lines with reversed or out-of-range bit offsets
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
