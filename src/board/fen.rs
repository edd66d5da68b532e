//! FEN import and export.
//!
//! Castling availability is not modelled: the field is validated on input
//! and always written as "-". The halfmove clock is written as 0 and the
//! fullmove number counts from the position the game was created in.

use super::error::FenError;
use super::grid::Board;
use super::{Cell, Color, GameState, Piece, Square};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Only the placement and side-to-move fields are required.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(castling) = parts.get(2) {
            if let Some(c) = castling.chars().find(|c| !"KQkq-".contains(*c)) {
                return Err(FenError::InvalidCastling { char: c });
            }
        }

        let en_passant_target = match parts.get(3) {
            None | Some(&"-") => None,
            Some(field) => {
                let sq: Square = field.parse().map_err(|_| FenError::InvalidEnPassant {
                    found: (*field).to_string(),
                })?;
                Some(sq)
            }
        };

        // The pawn behind the target is checked along with the kings.
        Ok(GameState::from_parts(board, side_to_move, en_passant_target)?)
    }

    /// Export the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.board.rows().iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(color, piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(*color));
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }

        let side = if self.white_to_move() { 'w' } else { 'b' };
        let en_passant = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let fullmove = 1 + self
            .move_history()
            .filter(|m| m.piece_moved().is_color(Color::Black))
            .count();

        format!("{fen} {side} - {en_passant} 0 {fullmove}")
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row;
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let sq = Square::new(row, col).ok_or(FenError::InvalidFileCount {
                rank,
                files: col + 1,
            })?;
            board.set(sq, Cell::Occupied(color, piece));
            col += 1;
        }
        if col != 8 {
            return Err(FenError::InvalidFileCount { rank, files: col });
        }
    }
    Ok(board)
}
