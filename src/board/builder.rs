//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let game = GameStateBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.board().pieces().count(), 3);
//! ```

use super::error::PositionError;
use super::grid::Board;
use super::{Cell, Color, GameState, Piece, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::standard(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Cell::Occupied(color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, Cell::Empty);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square. `build` rejects it unless an enemy
    /// pawn has just double-pushed past it.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game, checking that each side has exactly one king.
    pub fn build(self) -> Result<GameState, PositionError> {
        GameState::from_parts(self.board, self.side_to_move, self.en_passant_target)
    }
}
