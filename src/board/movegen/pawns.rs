use super::super::pins::{scan, Direction};
use super::super::{Cell, GameState, Move, Square};

impl GameState {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        pin: Option<Direction>,
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let allowed = |step: Direction| pin.map_or(true, |pin| pin.is_colinear(step));

        if allowed(Direction(dir, 0)) {
            if let Some(one) = from.offset(dir, 0).filter(|&sq| self.board.is_empty(sq)) {
                moves.push(Move::new(from, one, &self.board));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| self.board.is_empty(sq))
                    {
                        moves.push(Move::new(from, two, &self.board));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if !allowed(Direction(dir, dc)) {
                continue;
            }
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            match self.board[to] {
                Cell::Occupied(c, _) if c != color => moves.push(Move::new(from, to, &self.board)),
                Cell::Empty if self.en_passant_target == Some(to) => {
                    let mv = Move::en_passant(from, to, &self.board);
                    if self.en_passant_keeps_king_safe(&mv) {
                        moves.push(mv);
                    }
                }
                _ => {}
            }
        }
    }

    /// An en passant capture empties two squares on one row, which the pin
    /// scan cannot see. Replay it on a scratch board and look again.
    fn en_passant_keeps_king_safe(&self, mv: &Move) -> bool {
        let color = self.side_to_move;
        let mut board = self.board;
        board.set(mv.to(), mv.piece_moved());
        board.set(mv.from(), Cell::Empty);
        board.set(mv.en_passant_victim(), Cell::Empty);
        !scan(&board, self.king_square(color), color).in_check
    }
}
