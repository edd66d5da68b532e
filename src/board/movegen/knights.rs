use super::super::pins::{step, KNIGHT_OFFSETS};
use super::super::{GameState, Move, Square};

impl GameState {
    /// Knight jumps. Callers skip pinned knights: every jump leaves the pin line.
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for offset in KNIGHT_OFFSETS {
            if let Some(to) = step(from, offset, 1) {
                if !self.board[to].is_color(color) {
                    moves.push(Move::new(from, to, &self.board));
                }
            }
        }
    }
}
