//! Command-line argument definitions for the Shotlist CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output format, link rendering, and logging verbosity.

use clap::{Parser, ValueEnum};

use shotlist::OutputFormat;

/// Command-line arguments for the Shotlist tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input markup file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; standard output if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    pub format: Format,

    /// Append `(href)` after each link
    #[arg(long)]
    pub href: bool,

    /// Render links without `[...]` decoration
    #[arg(long)]
    pub no_decorator: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented scene/shot outline
    Outline,
    /// One card per screen of text
    Cards,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Outline => OutputFormat::Outline,
            Format::Cards => OutputFormat::Cards,
        }
    }
}
