//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: 3x3 grid of [`Cell`]s with get/set/reset
//! - [`rules`]: win and draw evaluation
//! - [`Round`]: turn state and placement validation for one game
//! - [`parse_axis`]: typed validation of player-entered coordinates
//!
//! Nothing here performs I/O; the console front end drives these types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
pub mod rules;
mod round;
mod score;
mod types;

pub use coord::{Axis, Coord, CoordError, parse_axis};
pub use round::{Outcome, PlaceError, Ply, Round};
pub use score::Scoreboard;
pub use types::{Board, Cell, Mark, SIZE};
