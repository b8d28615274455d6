//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_core`): board, win/draw rules, turn state
//! - **Console**: board rendering and line-based prompts
//! - **Game loop**: alternates turns, validates input, offers restarts
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{Console, GameConfig, GameLoop};
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let console = Console::new(stdin.lock(), std::io::stdout());
//! let score = GameLoop::new(console, GameConfig::default()).run()?;
//! println!("{score}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod game_loop;

pub use cli::{Cli, DEFAULT_CONFIG};
pub use config::{ConfigError, GameConfig};
pub use console::{Console, render_board};
pub use game_loop::GameLoop;

pub use tictactoe_core::{Board, Cell, Coord, Mark, Outcome, Scoreboard};
