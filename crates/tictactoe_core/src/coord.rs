//! Board coordinates and validation of user-entered values.
//!
//! Players type 1-indexed values; the board works in 0-indexed
//! [`Coord`]s. [`parse_axis`] is the only way text becomes an index.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::SIZE;

/// Which coordinate is being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Axis {
    /// Vertical position, top to bottom.
    Row,
    /// Horizontal position, left to right.
    Column,
}

/// A validated 0-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    col: usize,
    row: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` if either index is off the board.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col < SIZE && row < SIZE).then_some(Self { col, row })
    }

    /// Column index, `0..3`.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row index, `0..3`.
    pub fn row(self) -> usize {
        self.row
    }

    /// Builds a coordinate from two indices returned by [`parse_axis`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either index is off the board.
    pub fn from_axes(col: usize, row: usize) -> Self {
        debug_assert!(col < SIZE && row < SIZE, "axis index out of range");
        Self { col, row }
    }
}

impl std::fmt::Display for Coord {
    /// Shown 1-indexed as `(column, row)`, the way players enter it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col + 1, self.row + 1)
    }
}

/// Rejected coordinate input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordError {
    /// Input was not an integer.
    #[display("'{input}' is not a number")]
    NotANumber {
        /// Axis being entered.
        axis: Axis,
        /// The offending text, trimmed.
        input: String,
    },

    /// Input was an integer outside `1..=3`.
    ///
    /// Integers too large for `i64` are reported saturated.
    #[display("{axis} must be in range 1-3")]
    OutOfRange {
        /// Axis being entered.
        axis: Axis,
        /// The value entered.
        value: i64,
    },
}

impl std::error::Error for CoordError {}

/// Parses one 1-indexed coordinate typed by a player into a 0-indexed one.
///
/// Surrounding whitespace is ignored. Non-integers and values outside
/// `1..=3` are rejected so the caller can prompt again.
#[instrument]
pub fn parse_axis(input: &str, axis: Axis) -> Result<usize, CoordError> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => match saturated_integer(trimmed) {
            Some(value) => value,
            None => {
                return Err(CoordError::NotANumber {
                    axis,
                    input: trimmed.to_string(),
                });
            }
        },
    };

    if (1..=SIZE as i64).contains(&value) {
        Ok(value as usize - 1)
    } else {
        Err(CoordError::OutOfRange { axis, value })
    }
}

/// Clamps an all-digit string that overflowed `i64` to its sign's bound.
fn saturated_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis_accepts_range() {
        assert_eq!(parse_axis("1", Axis::Row), Ok(0));
        assert_eq!(parse_axis(" 3\n", Axis::Column), Ok(2));
    }

    #[test]
    fn test_parse_axis_rejects_out_of_range() {
        assert_eq!(
            parse_axis("0", Axis::Row),
            Err(CoordError::OutOfRange {
                axis: Axis::Row,
                value: 0
            })
        );
        assert_eq!(
            parse_axis("-2", Axis::Column),
            Err(CoordError::OutOfRange {
                axis: Axis::Column,
                value: -2
            })
        );
        assert!(matches!(
            parse_axis("4", Axis::Row),
            Err(CoordError::OutOfRange { value: 4, .. })
        ));
    }

    #[test]
    fn test_parse_axis_rejects_garbage() {
        let err = parse_axis("two", Axis::Column).unwrap_err();
        assert_eq!(err.to_string(), "'two' is not a number");
        assert!(matches!(parse_axis("", Axis::Row), Err(CoordError::NotANumber { .. })));
    }

    #[test]
    fn test_out_of_range_message_names_range() {
        let err = parse_axis("9", Axis::Row).unwrap_err();
        assert_eq!(err.to_string(), "Row must be in range 1-3");
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert_eq!(Coord::from_axes(2, 1), Coord::new(2, 1).unwrap());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "axis index out of range")]
    fn test_from_axes_rejects_off_board() {
        let _ = Coord::from_axes(0, 3);
    }

    #[test]
    fn test_huge_integers_are_out_of_range() {
        let err = parse_axis("99999999999999999999", Axis::Row).unwrap_err();
        assert_eq!(
            err,
            CoordError::OutOfRange {
                axis: Axis::Row,
                value: i64::MAX
            }
        );
        assert_eq!(err.to_string(), "Row must be in range 1-3");
        assert!(matches!(
            parse_axis("-99999999999999999999", Axis::Column),
            Err(CoordError::OutOfRange { value: i64::MIN, .. })
        ));
        assert!(matches!(
            parse_axis("12a", Axis::Row),
            Err(CoordError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_coord_display_is_one_indexed() {
        let coord = Coord::new(0, 2).unwrap();
        assert_eq!(coord.to_string(), "(1, 3)");
    }
}
