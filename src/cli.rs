//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Default configuration file, read from the working directory.
pub const DEFAULT_CONFIG: &str = "tictactoe.toml";

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark that opens every game (x or o)
    #[arg(short, long)]
    pub first: Option<Mark>,

    /// Keep previous turns on screen instead of clearing it
    #[arg(long)]
    pub no_clear: bool,

    /// Do not print the running score after each game
    #[arg(long)]
    pub no_scores: bool,
}
