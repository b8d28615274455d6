//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Every line of three as `(col, row)` pairs.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks whether `mark` occupies a complete row, column or diagonal.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let target = Cell::Marked(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(col, row)| board.get(col, row) == target))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::Cross, Mark::Nought]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}
