use super::super::pins::{is_attacked, step, KING_OFFSETS};
use super::super::{GameState, Move, Square};

impl GameState {
    /// King steps onto any adjacent square not held by an ally and not
    /// attacked once the king stands there.
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for offset in KING_OFFSETS {
            let Some(to) = step(from, offset, 1) else {
                continue;
            };
            if self.board[to].is_color(color) {
                continue;
            }
            if !is_attacked(&self.board, to, color) {
                moves.push(Move::new(from, to, &self.board));
            }
        }
    }
}
