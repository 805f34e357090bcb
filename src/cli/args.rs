//! Command line argument parsing for the Sonance CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sonance - phonetic name conversion and matching
#[derive(Parser, Debug, Clone)]
#[command(name = "sonance")]
#[command(about = "Convert names between phonetic representations and rank a corpus by sound")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SonanceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SonanceArgs {
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
    /// Encode a normalized sound string into a phonetic code
    Encode(EncodeArgs),

    /// Normalize an IPA transcription and encode it
    Ipa(IpaArgs),

    /// Rank a JSON corpus against a query
    Search(SearchArgs),
}

/// Arguments for the encode command
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// Lower-case, space-delimited sound string
    pub sound: String,
}

/// Arguments for the ipa command
#[derive(Parser, Debug, Clone)]
pub struct IpaArgs {
    /// IPA transcription
    pub ipa: String,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to a JSON corpus (array of name records)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Query text
    pub text: String,

    /// What the query text is: orthographic, ipa, metaphone, transliterated
    #[arg(short, long, default_value = "orthographic")]
    pub representation: String,

    /// Axis to score on: metaphone, ipa, hybrid
    #[arg(short, long, default_value = "metaphone")]
    pub dimension: String,

    /// Only return records with this gender tag
    #[arg(short, long)]
    pub gender: Option<String>,

    /// Language tag for transliterated input
    #[arg(short, long)]
    pub language: Option<String>,

    /// String metric: levenshtein or jaro-winkler
    #[arg(short, long, default_value = "levenshtein")]
    pub metric: String,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}
