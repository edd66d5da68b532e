//! Chess board state and rules.
//!
//! A mailbox board with pin/check-aware legal move generation. Supports
//! en passant and automatic promotion to a queen; castling is not modelled.
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.get_valid_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = game.parse_move("e2e4").unwrap();
//! game.make_move(e4);
//! game.undo_move();
//! assert_eq!(game.to_fen(), GameState::new().to_fen());
//! ```

mod builder;
mod error;
mod fen;
mod grid;
mod make_unmake;
mod movegen;
mod pins;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameStateBuilder;
pub use error::{FenError, MoveError, PositionError, SquareError};
pub use grid::Board;
pub use pins::{Check, CheckInfo, Direction, Pin};
pub use state::{GameState, GameStatus};
pub use types::{Cell, Color, Move, Piece, Square};
