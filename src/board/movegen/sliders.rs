use super::super::pins::{step, Direction, DIAGONAL, ORTHOGONAL};
use super::super::{Cell, GameState, Move, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn from_piece(piece: Piece) -> Option<SliderType> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> &'static [Direction] {
        const QUEEN: [Direction; 8] = [
            ORTHOGONAL[0],
            ORTHOGONAL[1],
            ORTHOGONAL[2],
            ORTHOGONAL[3],
            DIAGONAL[0],
            DIAGONAL[1],
            DIAGONAL[2],
            DIAGONAL[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl GameState {
    /// Walk each ray until the edge, an ally (excluded) or an enemy
    /// (included). A pinned slider keeps only rays along its pin.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        pin: Option<Direction>,
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        for &dir in slider.directions() {
            if pin.is_some_and(|pin| !pin.is_colinear(dir)) {
                continue;
            }
            for distance in 1..8 {
                let Some(to) = step(from, dir, distance) else {
                    break;
                };
                match self.board[to] {
                    Cell::Empty => moves.push(Move::new(from, to, &self.board)),
                    Cell::Occupied(c, _) if c == color => break,
                    Cell::Occupied(..) => {
                        moves.push(Move::new(from, to, &self.board));
                        break;
                    }
                }
            }
        }
    }
}
