//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 9;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the 9x9 board, stored as a row-major index (0-80).
///
/// Row 0 is Black's back rank and row 8 is White's. In algebraic
/// notation columns map to files `a`-`i` and row `r` maps to rank `9 - r`,
/// so White's king starts on `e1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// Create a square from a signed (row, col) pair, returning `None` off the board.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 || row >= BOARD_SIZE as i8 || col >= BOARD_SIZE as i8 {
            None
        } else {
            Some(Square((row as usize * BOARD_SIZE + col as usize) as u8))
        }
    }

    /// Create a square from an index (0-80)
    #[must_use]
    pub const fn try_from_index(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Panics in debug builds when `idx` is off the board.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Square(idx as u8)
    }

    /// Row, 0 at the top (Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Column, 0 = file a
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Row-major index (0-80)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square color parity; two squares share a color when this matches.
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// Mirror the square across the middle row.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(((BOARD_SIZE - 1 - self.row()) * BOARD_SIZE + self.col()) as u8)
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        let dr = self.row().abs_diff(other.row());
        let dc = self.col().abs_diff(other.col());
        dr.max(dc)
    }

    /// Manhattan distance.
    #[must_use]
    pub fn manhattan(self, other: Square) -> usize {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())
    }

    /// Iterate every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.col() as u8 + b'a') as char,
            BOARD_SIZE - self.row()
        )
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square((row * BOARD_SIZE + col) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let col = match file {
            'a'..='i' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='9' => rank as usize - '0' as usize,
            _ => return Err(invalid()),
        };
        Ok(Square::from_index((BOARD_SIZE - rank) * BOARD_SIZE + col))
    }
}
