//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::coord::Coord;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The cross, `X`.
    #[serde(rename = "X", alias = "x")]
    #[strum(serialize = "X")]
    Cross,
    /// The nought, `O`.
    #[serde(rename = "O", alias = "o")]
    #[strum(serialize = "O")]
    Nought,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the character drawn on the grid for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the character drawn on the grid for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board, addressed by `(col, row)`.
///
/// Indices outside `0..3` are a caller bug and panic. User input is
/// validated into a [`Coord`] before it reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells stored as `cells[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns the cell at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is not below 3.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row][col]
    }

    /// Writes `mark` at `(col, row)`.
    ///
    /// Occupancy is not checked here; callers look at [`Board::get`] first.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is not below 3.
    #[instrument(skip(self))]
    pub fn set(&mut self, col: usize, row: usize, mark: Mark) {
        self.cells[row][col] = Cell::Marked(mark);
    }

    /// Returns the cell at a validated coordinate.
    pub fn at(&self, coord: Coord) -> Cell {
        self.get(coord.col(), coord.row())
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.at(coord) == Cell::Empty
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| *cell != Cell::Empty).count()
    }
}
