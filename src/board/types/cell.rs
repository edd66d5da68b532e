//! Contents of a single board square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};

/// What occupies a square: nothing, or one piece of one color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color, Piece),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(color, _) => Some(color),
            Cell::Empty => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(_, piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    /// True if the square holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True if the square holds `piece` regardless of color.
    #[inline]
    #[must_use]
    pub fn is_piece(self, piece: Piece) -> bool {
        self.piece() == Some(piece)
    }

    /// FEN-style character, '.' for an empty square.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Occupied(color, piece) => piece.to_fen_char(color),
            Cell::Empty => '.',
        }
    }
}

impl From<(Color, Piece)> for Cell {
    fn from((color, piece): (Color, Piece)) -> Self {
        Cell::Occupied(color, piece)
    }
}
