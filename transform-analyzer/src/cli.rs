use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "transform-analyzer")]
#[command(about = "Analyze communication protocol transformations between environments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Decide whether a communication must be transformed and suggest a replacement.
    Analyze(AnalyzeArgs),
    /// Score every communication a target environment supports.
    Candidates(CandidatesArgs),
    /// Compare two communication profiles dimension by dimension.
    Diff(DiffArgs),
    /// Show one profile document.
    Inspect(InspectArgs),
    /// List profiles in a data directory.
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Directory holding environments/ and communications/.
    #[arg(long)]
    pub data_dir: PathBuf,
    /// Environment the communication runs in today.
    #[arg(long)]
    pub from: String,
    /// Environment to move to.
    #[arg(long)]
    pub to: String,
    /// Communication profile to move.
    #[arg(long)]
    pub comm: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional score tables TOML file with [[known]] and/or [[novel]] rows.
    #[arg(long)]
    pub tables: Option<PathBuf>,
    /// Also show every scored candidate with its calculation steps.
    #[arg(short, long)]
    pub verbose: bool,
    /// Fail when a transformation is required but not possible.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CandidatesArgs {
    #[arg(long)]
    pub data_dir: PathBuf,
    /// Environment whose supported communications are scored.
    #[arg(long)]
    pub to: String,
    /// Communication profile to move.
    #[arg(long)]
    pub comm: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub tables: Option<PathBuf>,
    /// Show calculation steps for each candidate.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum DocumentKind {
    Communication,
    Environment,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    /// Document kind; detected from the content when omitted.
    #[arg(long, value_enum)]
    pub kind: Option<DocumentKind>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum ListKind {
    Communications,
    Environments,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub data_dir: PathBuf,
    #[arg(value_enum)]
    pub kind: ListKind,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
