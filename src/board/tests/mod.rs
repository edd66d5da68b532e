//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for known positions
//! - `pins_checks.rs` - Pin and check detection, legality under check
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - En passant, promotion, mate and stalemate
//! - `proptest.rs` - Property-based tests

use crate::board::{GameState, Move, Square};

mod perft;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn game(fen: &str) -> GameState {
    GameState::try_from_fen(fen).unwrap()
}

pub(super) fn play(game: &mut GameState, moves: &[&str]) {
    for notation in moves {
        let mv = game
            .parse_move(notation)
            .unwrap_or_else(|e| panic!("{notation}: {e}"));
        game.make_move(mv);
    }
}

pub(super) fn notations(moves: &[Move]) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(Move::notation).collect();
    out.sort();
    out
}
