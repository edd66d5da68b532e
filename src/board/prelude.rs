//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.status(), GameStatus::NotInCheck);
//! ```

pub use super::{
    Board, Cell, Color, GameState, GameStateBuilder, GameStatus, Move, MoveError, Piece, Square,
    SquareError,
};
