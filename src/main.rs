//! Tic-tac-toe - terminal front end.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Console, GameConfig, GameLoop};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    info!(?config, "Starting tictactoe");

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout().lock());
    let score = GameLoop::new(console, config).run()?;

    info!(%score, "Session finished");
    Ok(())
}
