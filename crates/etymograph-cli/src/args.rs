//! Command-line argument definitions for the Etymograph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use etymograph::export::OutputFormat;

/// Output document format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Rendered graph image
    Svg,
    /// Node and edge lists for graph canvases
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Svg => OutputFormat::Svg,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Command-line arguments for the Etymograph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input notation file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the requested format, falling back to the output extension.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["etymograph", "word.ety"]).unwrap();
        assert_eq!(args.input, "word.ety");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_level, "info");
        assert_eq!(args.output_format(), OutputFormat::Svg);
    }

    #[test]
    fn test_format_inferred_from_extension() {
        let args = Args::try_parse_from(["etymograph", "word.ety", "-o", "graph.json"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_explicit_format_wins() {
        let args =
            Args::try_parse_from(["etymograph", "word.ety", "-o", "graph.json", "-f", "svg"])
                .unwrap();
        assert_eq!(args.output_format(), OutputFormat::Svg);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["etymograph", "word.ety", "-f", "png"]).is_err());
    }
}
