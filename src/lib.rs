//! Chess rules engine: board state, legal move generation under check and
//! pin constraints, and exactly reversible move application.

/// Engine event logging through the `log` facade when the `logging`
/// feature is enabled; compiled out otherwise.
#[cfg(feature = "logging")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        log::$level!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

pub mod board;
pub mod console;
pub mod sync;

pub use board::{Board, Cell, Color, GameState, GameStatus, Move, Piece, Square};
pub use sync::SharedGame;
