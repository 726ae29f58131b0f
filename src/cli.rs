use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "advent-check",
    version,
    about = "Checks advent calendar ticket numbers against the published daily prize tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check(CheckArgs),
    Index(IndexArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Evaluate every published day instead of a single one.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Offset into the index for single-day mode (0 = newest).
    #[arg(long, default_value_t = 0, conflicts_with = "all")]
    pub entry: usize,

    /// Ticket number to look for; repeat to check several.
    #[arg(long = "number")]
    pub numbers: Vec<i64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}
