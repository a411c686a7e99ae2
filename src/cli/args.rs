//! Command line argument parsing for Lexiphrase CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexiphrase - Dictionary phrase recognition for token streams
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiphrase")]
#[command(about = "Recognize multi-token dictionary phrases in text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexiphrase Contributors")]
#[command(long_about = None)]
pub struct LexiphraseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
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

impl LexiphraseArgs {
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
    /// Compile a word list into a word set file
    Compile(CompileArgs),

    /// Run the dictionary matcher over text
    Analyze(AnalyzeArgs),

    /// Show statistics of a dictionary
    Inspect(InspectArgs),
}

/// Arguments for compiling a word list
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Word list (JSON array or one phrase per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Output path of the compiled word set
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Dictionary: word list or compiled word set (.bin)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Matcher settings file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Emit every recognized phrase instead of only the longest
    #[arg(long)]
    pub emit_all: bool,

    /// Text to analyze
    #[arg(short, long, conflicts_with = "input", required_unless_present = "input")]
    pub text: Option<String>,

    /// File whose lines are analyzed independently
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Only print dictionary matches
    #[arg(long)]
    pub matches_only: bool,
}

/// Arguments for inspecting a dictionary
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Dictionary: word list or compiled word set (.bin)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// List every analyzed key with its canonical text
    #[arg(short, long)]
    pub entries: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
