//! Command-line interface for the rewind terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time-travel through the move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a jump list for time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
