//! Command line argument parsing for the Lexiclean CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexiclean - deterministic text normalization for sequence models
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiclean")]
#[command(about = "Deterministic text normalization for sequence models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexicleanArgs {
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

impl LexicleanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Learn the removal vocabulary from training records and clean them
    Fit(FitArgs),

    /// Clean records with a previously fitted state
    Apply(ApplyArgs),

    /// Clean a single text
    Clean(CleanArgs),
}

/// Arguments for fitting
#[derive(Parser, Debug, Clone)]
pub struct FitArgs {
    /// Training records (.jsonl, or plain text with one record per line)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Normalizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Fraction of the most frequent words to remove (overrides the config file)
    #[arg(long)]
    pub top_fraction: Option<f64>,

    /// Fraction of the least frequent words to remove (overrides the config file)
    #[arg(long)]
    pub bottom_fraction: Option<f64>,

    /// Where to write the fitted state (.json for JSON, anything else for binary)
    #[arg(short, long, value_name = "STATE_FILE")]
    pub state: PathBuf,

    /// Where to write the cleaned records (printed when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for applying a fitted state
#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    /// Records to clean (.jsonl, or plain text with one record per line)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// State written by `fit`
    #[arg(short, long, value_name = "STATE_FILE")]
    pub state: PathBuf,

    /// Where to write the cleaned records (printed when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for cleaning one text
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Text to clean
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// State written by `fit` (default configuration when omitted)
    #[arg(short, long, value_name = "STATE_FILE")]
    pub state: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
