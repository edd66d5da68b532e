//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::notation::{col_for_file, row_for_rank, COLS_TO_FILES, ROWS_TO_RANKS};
use crate::board::error::SquareError;

/// A square on the chess board, addressed as (row, column).
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1). Column 0 is file 'a'. Both coordinates are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are in range.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Step `dr` rows and `dc` columns, or `None` when that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLS_TO_FILES[self.col], ROWS_TO_RANKS[self.row])
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfBounds { row, col })
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = col_for_file(file).ok_or_else(invalid)?;
        let row = row_for_rank(rank).ok_or_else(invalid)?;
        Ok(Square::at(row, col))
    }
}
