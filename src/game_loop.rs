//! Turn controller: plays games on the console until the players stop.

use crate::config::GameConfig;
use crate::console::Console;
use std::io::{self, BufRead, Write};
use tictactoe_core::{Mark, Outcome, PlaceError, Ply, Round, Scoreboard};
use tracing::{debug, info, instrument, warn};

/// Drives games between two players sharing one console.
pub struct GameLoop<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    round: Round,
    score: Scoreboard,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    /// Creates a loop over `console` using `config`.
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        let round = Round::new(*config.first_mover());
        Self {
            console,
            config,
            round,
            score: Scoreboard::new(),
        }
    }

    /// Plays games until the players decline a restart or input ends.
    ///
    /// Returns the final score.
    #[instrument(skip(self), fields(first_mover = %self.round.first_mover()))]
    pub fn run(&mut self) -> io::Result<Scoreboard> {
        loop {
            self.round.reset();
            info!(game = self.score.games() + 1, "Starting game");

            let Some(outcome) = self.play_round()? else {
                info!("Input closed mid-game, stopping");
                break;
            };

            self.score.record(outcome);
            self.announce(outcome)?;

            if !self.console.ask_restart()? {
                info!(score = %self.score, "Players declined a new game");
                break;
            }
        }

        Ok(self.score)
    }

    /// Plays plies until the round ends. `None` if input ran out.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> io::Result<Option<Outcome>> {
        loop {
            self.show_turn(self.round.to_move())?;

            loop {
                let Some(coord) = self.console.ask_coord()? else {
                    return Ok(None);
                };

                match self.round.place(coord) {
                    Ok(Ply::Continue { next }) => {
                        debug!(%coord, %next, "Placed");
                        break;
                    }
                    Ok(Ply::Finished(outcome)) => return Ok(Some(outcome)),
                    Err(err @ PlaceError::Occupied(_)) => self.console.say(err)?,
                    Err(PlaceError::RoundOver) => {
                        warn!("Placement attempted after round ended");
                        return Ok(self.round.outcome());
                    }
                }
            }
        }
    }

    fn show_turn(&mut self, mark: Mark) -> io::Result<()> {
        if *self.config.clear_screen() {
            self.console.clear()?;
        }
        self.console.show_board(self.round.board())?;
        self.console.say("")?;
        self.console.say(format!("It's player {}'s turn!", mark))?;
        self.console.say("")
    }

    fn announce(&mut self, outcome: Outcome) -> io::Result<()> {
        if *self.config.clear_screen() {
            self.console.clear()?;
        }
        self.console.show_board(self.round.board())?;
        self.console.say("")?;
        match outcome {
            Outcome::Winner(mark) => self.console.say(format!("Player {} won!", mark))?,
            Outcome::Draw => self.console.say("It's a draw!")?,
        }
        if *self.config.show_scores() {
            self.console.say(format!("Score: {}", self.score))?;
        }
        self.console.say("")
    }

    /// Consumes the loop, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
