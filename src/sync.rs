//! Shared access to a single game.
//!
//! `GameState` is plain owned data with no interior locking. Hosts that
//! drive one game from several threads (an input thread and a render
//! thread, say) share it through [`SharedGame`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{GameState, GameStatus, Move, MoveError};

/// A cloneable handle to one game behind a mutex.
///
/// Every operation takes the lock for its whole duration, so a move is
/// never observed half applied.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    /// A new game in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from(GameState::new())
    }

    /// Run `f` with shared access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.0.lock())
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.0.lock())
    }

    pub fn valid_moves(&self) -> Vec<Move> {
        self.with_mut(GameState::get_valid_moves)
    }

    /// Apply `mv` without a legality check; see [`GameState::make_move`].
    pub fn make_move(&self, mv: Move) {
        self.with_mut(|game| game.make_move(mv));
    }

    /// Apply `mv` if it is legal in the current position.
    pub fn try_make_move(&self, mv: Move) -> Result<(), MoveError> {
        self.with_mut(|game| game.try_make_move(mv))
    }

    pub fn undo_move(&self) {
        self.with_mut(GameState::undo_move);
    }

    pub fn status(&self) -> GameStatus {
        self.with_mut(GameState::status)
    }

    pub fn to_fen(&self) -> String {
        self.with(GameState::to_fen)
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.with(GameState::clone)
    }
}

impl From<GameState> for SharedGame {
    fn from(game: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }
}
