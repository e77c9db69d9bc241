//! Command line argument parsing for the Emend CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Emend - a Damerau-Levenshtein spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "emend")]
#[command(about = "A Damerau-Levenshtein spell checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EmendArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EmendArgs {
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

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a word or a sentence against a corpus-built dictionary
    Check(CheckArgs),

    /// List correction candidates for a single word
    Suggest(SuggestArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for the check command
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Corpus text file the dictionary is built from
    #[arg(short, long, env = "EMEND_CORPUS")]
    pub corpus: PathBuf,

    /// JSON file with edit costs and the correction threshold
    #[arg(long)]
    pub costs_file: Option<PathBuf>,

    /// Override the correction threshold
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Words to correct (joined with spaces)
    #[arg(required = true)]
    pub input: Vec<String>,
}

/// Arguments for the suggest command
#[derive(clap::Args, Debug, Clone)]
pub struct SuggestArgs {
    /// Corpus text file the dictionary is built from
    #[arg(short, long, env = "EMEND_CORPUS")]
    pub corpus: PathBuf,

    /// JSON file with edit costs and the correction threshold
    #[arg(long)]
    pub costs_file: Option<PathBuf>,

    /// Override the correction threshold
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// The word to look up
    pub word: String,
}

/// Arguments for the stats command
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus text file the dictionary is built from
    #[arg(short, long, env = "EMEND_CORPUS")]
    pub corpus: PathBuf,
}
