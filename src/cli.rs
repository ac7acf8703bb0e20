use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dataset-detect - Identify the dataset format of a directory
#[derive(Parser, Debug)]
#[command(name = "dataset-detect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect which dataset formats a directory matches
    Detect(DetectArgs),

    /// List the registered dataset formats
    Formats,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Dataset root directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also try subdirectories up to N levels below the root as dataset roots
    #[arg(short = 'd', long, value_name = "N")]
    pub depth: Option<usize>,

    /// Explain why each rejected format was rejected
    #[arg(long)]
    pub show_rejections: bool,

    /// Write a JSON report to FILE
    #[arg(long, value_name = "FILE")]
    pub json_report: Option<PathBuf>,

    /// Print the JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Only try these formats (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "FORMATS")]
    pub formats: Option<Vec<String>>,

    /// Skip these formats (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "FORMATS")]
    pub exclude_formats: Option<Vec<String>>,

    /// Parallel detection jobs (1 = sequential, 0 = auto)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}
