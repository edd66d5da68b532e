//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveError;
use crate::board::grid::Board;

/// A single board transition, captured from a board snapshot.
///
/// A `Move` records what stood on its origin and destination squares at the
/// time it was built and never changes afterwards. It holds no reference to
/// the game it came from.
///
/// Two moves compare equal when they share origin and destination; the
/// recorded pieces and flags are ignored. This lets a front end test a
/// square pair it built itself against the legal-move list.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Cell,
    piece_captured: Cell,
    is_en_passant: bool,
    is_pawn_promotion: bool,
}

impl Move {
    /// Build a move from raw `(row, col)` coordinates.
    ///
    /// Fails with [`MoveError::OutOfBounds`] when either coordinate pair is
    /// off the board.
    pub fn from_squares(
        origin: (usize, usize),
        destination: (usize, usize),
        board: &Board,
    ) -> Result<Move, MoveError> {
        let from = Square::try_from(origin)?;
        let to = Square::try_from(destination)?;
        Ok(Move::new(from, to, board))
    }

    /// Build an ordinary (non en passant) move between two squares.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Move {
        Move::build(from, to, board, false)
    }

    /// Build an en passant capture. The captured pawn sits beside `to` on
    /// the origin row, not on `to` itself.
    #[must_use]
    pub(crate) fn en_passant(from: Square, to: Square, board: &Board) -> Move {
        Move::build(from, to, board, true)
    }

    fn build(from: Square, to: Square, board: &Board, is_en_passant: bool) -> Move {
        let piece_moved = board[from];
        let piece_captured = match (is_en_passant, piece_moved) {
            (true, Cell::Occupied(color, _)) => Cell::Occupied(color.opponent(), Piece::Pawn),
            _ => board[to],
        };
        let is_pawn_promotion = match piece_moved {
            Cell::Occupied(color, Piece::Pawn) => to.row() == color.promotion_row(),
            _ => false,
        };

        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_pawn_promotion,
        }
    }

    /// Get the origin square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> Cell {
        self.piece_moved
    }

    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Cell {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !self.piece_captured.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_king_move(&self) -> bool {
        self.piece_moved.is_piece(Piece::King)
    }

    /// A pawn advancing two rows from its start square.
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.is_piece(Piece::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Square of the pawn removed by an en passant capture.
    #[inline]
    #[must_use]
    pub(crate) fn en_passant_victim(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Origin and destination in algebraic form, e.g. "e2e4".
    #[must_use]
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
