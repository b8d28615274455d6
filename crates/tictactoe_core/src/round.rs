//! Turn state for a single game.
//!
//! A [`Round`] owns the board and the mark to move. Placements go through
//! [`Round::place`], which rejects occupied cells without passing the turn
//! and reports whether the game continues, was won, or was drawn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::coord::Coord;
use crate::rules;
use crate::types::{Board, Mark};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The board filled up with no line.
    Draw,
}

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    /// No line yet; `next` is now to move.
    Continue {
        /// Mark to move next.
        next: Mark,
    },
    /// The placement ended the game.
    Finished(Outcome),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The target cell already holds a mark.
    #[display("Field at {} already taken!", _0)]
    Occupied(Coord),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    RoundOver,
}

impl std::error::Error for PlaceError {}

/// One game of tic-tac-toe from empty board to win or draw.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    first_mover: Mark,
    to_move: Mark,
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a round with an empty board and `first_mover` to play.
    #[instrument]
    pub fn new(first_mover: Mark) -> Self {
        Self {
            board: Board::new(),
            first_mover,
            to_move: first_mover,
            outcome: None,
        }
    }

    /// Clears the board and hands the move back to the first mover.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = self.first_mover;
        self.outcome = None;
        debug!(first_mover = %self.first_mover, "Round reset");
    }

    /// Places the current mark at `coord`.
    ///
    /// On success the turn passes to the opponent unless the move ended the
    /// game. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Occupied`] if the cell is taken and
    /// [`PlaceError::RoundOver`] if the game has finished.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, coord: Coord) -> Result<Ply, PlaceError> {
        if self.outcome.is_some() {
            return Err(PlaceError::RoundOver);
        }

        if !self.board.is_empty(coord) {
            debug!(%coord, "Rejected placement on occupied cell");
            return Err(PlaceError::Occupied(coord));
        }

        let mark = self.to_move;
        self.board.set(coord.col(), coord.row(), mark);

        if rules::is_winner(&self.board, mark) {
            info!(%mark, moves = self.board.occupied(), "Line completed");
            let outcome = Outcome::Winner(mark);
            self.outcome = Some(outcome);
            return Ok(Ply::Finished(outcome));
        }

        if rules::is_full(&self.board) {
            info!(moves = self.board.occupied(), "Board full with no line");
            self.outcome = Some(Outcome::Draw);
            return Ok(Ply::Finished(Outcome::Draw));
        }

        self.to_move = mark.opponent();
        Ok(Ply::Continue { next: self.to_move })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// After a finished game this is the mark that made the last move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark that opens every game.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// How the game ended, or `None` while it is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Mark::Cross)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn at(col: usize, row: usize) -> Coord {
        Coord::new(col, row).unwrap()
    }

    #[test]
    fn test_turns_alternate_from_first_mover() {
        let mut round = Round::new(Mark::Nought);
        let expected = [Mark::Nought, Mark::Cross, Mark::Nought, Mark::Cross];
        let coords = [at(0, 0), at(1, 0), at(2, 0), at(0, 1)];

        for (coord, mark) in coords.into_iter().zip(expected) {
            assert_eq!(round.to_move(), mark);
            round.place(coord).unwrap();
            assert_eq!(round.board().at(coord), Cell::Marked(mark));
        }
        assert_eq!(round.to_move(), Mark::Nought);
    }

    #[test]
    fn test_occupied_rejection_keeps_state() {
        let mut round = Round::new(Mark::Cross);
        round.place(at(1, 1)).unwrap();
        let before = round.board().clone();

        let err = round.place(at(1, 1)).unwrap_err();
        assert_eq!(err, PlaceError::Occupied(at(1, 1)));
        assert_eq!(err.to_string(), "Field at (2, 2) already taken!");
        assert_eq!(round.board(), &before);
        assert_eq!(round.board().get(1, 1), Cell::Marked(Mark::Cross));
        assert_eq!(round.to_move(), Mark::Nought);
        assert_eq!(round.board().occupied(), 1);
    }

    #[test]
    fn test_place_after_win_is_rejected() {
        let mut round = Round::new(Mark::Cross);
        for coord in [at(0, 0), at(0, 1), at(1, 0), at(1, 1)] {
            round.place(coord).unwrap();
        }
        assert_eq!(
            round.place(at(2, 0)),
            Ok(Ply::Finished(Outcome::Winner(Mark::Cross)))
        );
        assert_eq!(round.place(at(2, 2)), Err(PlaceError::RoundOver));
        assert_eq!(round.to_move(), Mark::Cross);
    }

    #[test]
    fn test_reset_restores_first_mover() {
        let mut round = Round::new(Mark::Cross);
        round.place(at(0, 0)).unwrap();
        round.reset();
        assert_eq!(round.to_move(), Mark::Cross);
        assert_eq!(round.board().occupied(), 0);
        assert_eq!(round.outcome(), None);
    }
}
