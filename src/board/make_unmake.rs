use super::error::MoveError;
use super::state::UnmakeInfo;
use super::{Cell, GameState, Move, Piece, Square};

impl GameState {
    /// Apply `mv` to the board.
    ///
    /// `mv` should come from the latest [`GameState::get_valid_moves`]
    /// result; anything else is applied mechanically without rule checks.
    /// See [`GameState::try_make_move`] for a checked variant.
    pub fn make_move(&mut self, mv: Move) {
        let previous_en_passant_target = self.en_passant_target;

        self.board.set(mv.to(), mv.piece_moved());
        self.board.set(mv.from(), Cell::Empty);

        if let Cell::Occupied(color, piece) = mv.piece_moved() {
            if piece == Piece::King {
                self.set_king_square(color, mv.to());
            }
            if mv.is_pawn_promotion() {
                self.board.set(mv.to(), Cell::Occupied(color, Piece::Queen));
                trace_event!(debug, "{} pawn promoted on {}", color, mv.to());
            }
        }

        if mv.is_en_passant() {
            self.board.set(mv.en_passant_victim(), Cell::Empty);
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            let skipped_row = (mv.from().row() + mv.to().row()) / 2;
            let skipped = Square::at(skipped_row, mv.from().col());
            trace_event!(trace, "en passant target set to {}", skipped);
            Some(skipped)
        } else {
            None
        };

        self.history.push(UnmakeInfo {
            mv,
            previous_en_passant_target,
        });
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Apply `mv` only if it is legal in the current position.
    ///
    /// The legal list is regenerated, and the generated move (with its
    /// en passant and promotion flags) is the one applied.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let legal = self
            .get_valid_moves()
            .into_iter()
            .find(|candidate| *candidate == mv)
            .ok_or_else(|| MoveError::IllegalMove {
                notation: mv.notation(),
            })?;
        self.make_move(legal);
        Ok(())
    }

    /// Take back the most recent move. Does nothing when no move has been made.
    pub fn undo_move(&mut self) {
        let Some(UnmakeInfo {
            mv,
            previous_en_passant_target,
        }) = self.history.pop()
        else {
            trace_event!(trace, "undo requested with empty history");
            return;
        };

        self.board.set(mv.from(), mv.piece_moved());
        if mv.is_en_passant() {
            self.board.set(mv.to(), Cell::Empty);
            self.board.set(mv.en_passant_victim(), mv.piece_captured());
        } else {
            self.board.set(mv.to(), mv.piece_captured());
        }

        if let Cell::Occupied(color, Piece::King) = mv.piece_moved() {
            self.set_king_square(color, mv.from());
        }

        self.side_to_move = self.side_to_move.opponent();
        self.en_passant_target = previous_en_passant_target;
    }
}
