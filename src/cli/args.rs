//! Command line argument parsing for the Rustem CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Rustem - Russian text analysis with stop words and stemming
#[derive(Parser, Debug, Clone)]
#[command(name = "rustem")]
#[command(about = "Tokenize, filter and stem Russian text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RustemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RustemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the resulting tokens
    Analyze(AnalyzeArgs),

    /// Validate and list a stop word list
    Stopwords(StopwordsArgs),
}

/// Arguments for text analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads standard input when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Analyze each line of this file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Stop word list in Snowball format (built-in Russian list by default)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Words that must not be stemmed
    #[arg(short = 'x', long = "exclude", value_delimiter = ',', value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Compatibility version, e.g. "4.7", "LUCENE_30" or "current"
    #[arg(long = "lucene-version", value_name = "VERSION")]
    pub lucene_version: Option<String>,

    /// Field name the text belongs to
    #[arg(long, default_value = "body")]
    pub field: String,

    /// Analyzer configuration file (JSON); command line flags take precedence
    #[arg(short, long, value_name = "FILE", env = "RUSTEM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for listing a stop word list
#[derive(Parser, Debug, Clone)]
pub struct StopwordsArgs {
    /// Wordlist file to validate (the built-in Russian list by default)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only print the number of entries
    #[arg(long)]
    pub count: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
