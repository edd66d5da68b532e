//! Move generation and legality filtering.
//!
//! Generators read one immutable [`CheckInfo`] snapshot per call, so pinned
//! pieces are restricted during generation rather than filtered afterwards.

mod kings;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

use self::sliders::SliderType;
use super::error::MoveError;
use super::pins::{step, Check, CheckInfo};
use super::{GameState, Move, Piece, Square};

impl GameState {
    /// Pseudo-legal moves for the side to move, with pins already applied
    /// and king moves already checked for safety. Only the response to a
    /// check on the king's current square is left to the caller.
    #[must_use]
    pub fn get_possible_moves(&self, info: &CheckInfo) -> Vec<Move> {
        let color = self.side_to_move;
        let mut moves = Vec::with_capacity(64);

        for (from, _, piece) in self.board.pieces().filter(|&(_, c, _)| c == color) {
            let pin = info.pin_on(from);
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, pin, &mut moves),
                Piece::Knight => {
                    if pin.is_none() {
                        self.generate_knight_moves(from, &mut moves);
                    }
                }
                Piece::King => self.generate_king_moves(from, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    if let Some(slider) = SliderType::from_piece(piece) {
                        self.generate_slider_moves(from, slider, pin, &mut moves);
                    }
                }
            }
        }

        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Refreshes the pin/check snapshot exposed by [`GameState::in_check`],
    /// [`GameState::pins`] and [`GameState::checks`].
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let en_passant_target = self.en_passant_target;
        let info = self.check_for_pins_and_checks();
        let king = self.king_square(self.side_to_move);

        let moves = match info.checks.as_slice() {
            [] => self.get_possible_moves(&info),
            [check] => {
                let rescue = self.rescue_squares(king, check);
                let mut moves = self.get_possible_moves(&info);
                // En passant moves were already replayed against the king.
                moves.retain(|m| {
                    m.is_king_move() || m.is_en_passant() || rescue.contains(&m.to())
                });
                moves
            }
            _ => {
                let mut moves = Vec::with_capacity(8);
                self.generate_king_moves(king, &mut moves);
                moves
            }
        };

        self.check_info = info;
        self.en_passant_target = en_passant_target;
        moves
    }

    /// Squares where a non-king piece answers `check`: the checker itself,
    /// plus every square between it and the king for a ray attacker.
    fn rescue_squares(&self, king: Square, check: &Check) -> HashSet<Square> {
        if self.board[check.square].is_piece(Piece::Knight) {
            return HashSet::from([check.square]);
        }
        let mut squares = HashSet::new();
        for distance in 1..8 {
            let Some(sq) = step(king, check.direction, distance) else {
                break;
            };
            squares.insert(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    /// Resolve a move string such as "e2e4" against the legal moves.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveError> {
        let notation = notation.trim();
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveError::InvalidNotation {
                notation: notation.to_string(),
            });
        }
        let from: Square = notation[..2].parse()?;
        let to: Square = notation[2..].parse()?;
        self.get_valid_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
            .ok_or_else(|| MoveError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
