//! Command-line argument definitions for the element model CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, render overrides and logging verbosity.

use std::str::FromStr;

use clap::Parser;

use element_model::Indent;

/// Command-line arguments for the element model tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input element model file (JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output markup file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Indentation: a number of spaces or a literal unit string
    ///
    /// Integer text is a space count; zero or negative means dense output.
    #[arg(long, allow_negative_numbers = true, value_parser = Indent::from_str)]
    pub indent: Option<Indent>,

    /// Render without validating the input first
    #[arg(long)]
    pub no_validate: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
