//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Cell` - the contents of one square
//! - `Square` - a validated (row, column) coordinate
//! - `Move` - an immutable board transition

mod cell;
mod moves;
mod notation;
mod piece;
mod square;

pub use cell::Cell;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use notation::notation_labels;
