//! Line-based terminal I/O: board rendering and prompts.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tictactoe_core::{Axis, Board, Coord, parse_axis};
use tracing::{debug, instrument};

/// Draws the board as three rows of `X|O| ` separated by `------`.
pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n------\n")
}

/// Terminal reader and writer used by the game loop.
///
/// Generic over its streams so tests can drive it with scripted input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Clears the screen and moves the cursor home.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Writes the board followed by a newline.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(board))
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `prompt` and reads one line; `None` once input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so a garbled line is rejected by the caller like any other bad input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Asks for one axis until a value in `1..=3` is entered.
    ///
    /// Returns the 0-indexed value, or `None` if input ends first.
    #[instrument(skip(self))]
    pub fn ask_axis(&mut self, axis: Axis) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.ask(&format!("{}: ", axis))? else {
                return Ok(None);
            };
            match parse_axis(&line, axis) {
                Ok(index) => return Ok(Some(index)),
                Err(err) => {
                    debug!(%err, "Rejected coordinate");
                    self.say(err)?;
                }
            }
        }
    }

    /// Asks for a row and then a column.
    pub fn ask_coord(&mut self) -> io::Result<Option<Coord>> {
        let Some(row) = self.ask_axis(Axis::Row)? else {
            return Ok(None);
        };
        let Some(col) = self.ask_axis(Axis::Column)? else {
            return Ok(None);
        };
        Ok(Some(Coord::from_axes(col, row)))
    }

    /// Asks whether to play again.
    ///
    /// Anything not starting with `n` or `N` means yes. Closed input means no.
    #[instrument(skip(self))]
    pub fn ask_restart(&mut self) -> io::Result<bool> {
        let Some(reply) = self.ask("New Game? [Y/n]: ")? else {
            return Ok(false);
        };
        let declined = reply
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'n'));
        Ok(!declined)
    }
}
