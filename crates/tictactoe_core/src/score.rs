//! Running tally of finished games for one session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::round::Outcome;
use crate::types::Mark;

/// Wins per mark and draws since the program started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    cross_wins: u32,
    /// Games won by O.
    nought_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::Cross) => self.cross_wins += 1,
            Outcome::Winner(Mark::Nought) => self.nought_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Cross => self.cross_wins,
            Mark::Nought => self.nought_wins,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.cross_wins + self.nought_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.cross_wins, self.nought_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Winner(Mark::Cross));
        score.record(Outcome::Winner(Mark::Cross));
        score.record(Outcome::Winner(Mark::Nought));
        score.record(Outcome::Draw);

        assert_eq!(score.wins(Mark::Cross), 2);
        assert_eq!(*score.nought_wins(), 1);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.games(), 4);
        assert_eq!(score.to_string(), "X: 2  O: 1  Draws: 1");
    }
}
