use super::error::PositionError;
use super::grid::Board;
use super::pins::{Check, CheckInfo, Pin};
use super::{Cell, Color, Move, Piece, Square};

/// What `undo_move` needs beyond the move itself.
#[derive(Clone, Debug)]
pub(crate) struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) previous_en_passant_target: Option<Square>,
}

/// Situation of the side to move, derived from its legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotInCheck,
    SingleCheck,
    DoubleCheck,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// No further moves can be applied.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Authoritative state of one game.
///
/// Owns the board, whose turn it is, the cached king squares, the move
/// history and the en passant target. The pin/check snapshot is refreshed
/// by every [`GameState::get_valid_moves`] call.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<UnmakeInfo>,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) check_info: CheckInfo,
}

impl GameState {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            side_to_move: Color::White,
            history: Vec::new(),
            white_king: Square::at(7, 4),
            black_king: Square::at(0, 4),
            en_passant_target: None,
            check_info: CheckInfo::default(),
        }
    }

    /// Assemble a game from a prepared board.
    ///
    /// Each side must have exactly one king, and an en passant target must
    /// be the empty square just skipped by an enemy pawn's double push.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        en_passant_target: Option<Square>,
    ) -> Result<Self, PositionError> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;
        if let Some(square) = en_passant_target {
            check_en_passant_target(&board, side_to_move, square)?;
        }
        Ok(GameState {
            board,
            side_to_move,
            history: Vec::new(),
            white_king,
            black_king,
            en_passant_target,
            check_info: CheckInfo::default(),
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Cached location of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Applied moves, oldest first.
    pub fn move_history(&self) -> impl ExactSizeIterator<Item = &Move> + '_ {
        self.history.iter().map(|entry| &entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Check state as of the last `get_valid_moves` call.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.check_info.in_check
    }

    /// Pins as of the last `get_valid_moves` call.
    #[inline]
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.check_info.pins
    }

    /// Checks as of the last `get_valid_moves` call.
    #[inline]
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.check_info.checks
    }

    /// Classify the position for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let has_moves = !self.get_valid_moves().is_empty();
        let status = match (self.check_info.checks.len(), has_moves) {
            (0, false) => GameStatus::Stalemate,
            (_, false) => GameStatus::Checkmate,
            (0, true) => GameStatus::NotInCheck,
            (1, true) => GameStatus::SingleCheck,
            (_, true) => GameStatus::DoubleCheck,
        };
        if status.is_terminal() {
            trace_event!(debug, "{:?} with {} to move", status, self.side_to_move);
        }
        status
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

fn check_en_passant_target(
    board: &Board,
    side_to_move: Color,
    square: Square,
) -> Result<(), PositionError> {
    let pusher = side_to_move.opponent();
    let skipped_row = pusher.pawn_start_row() as isize + pusher.pawn_direction();
    let victim = square.offset(pusher.pawn_direction(), 0);
    let valid = square.row() as isize == skipped_row
        && board.is_empty(square)
        && victim.is_some_and(|sq| board[sq] == Cell::Occupied(pusher, Piece::Pawn));
    if valid {
        Ok(())
    } else {
        Err(PositionError::InvalidEnPassant { square })
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square, PositionError> {
    let mut kings = board.kings(color);
    match (kings.next(), kings.count()) {
        (Some(sq), 0) => Ok(sq),
        (first, rest) => Err(PositionError::KingCount {
            color,
            found: usize::from(first.is_some()) + rest,
        }),
    }
}
