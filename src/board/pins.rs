//! Pin and check detection.
//!
//! Everything here is a pure function of a board, a king square and the
//! king's color. The result is an immutable [`CheckInfo`] snapshot that the
//! move generators read but never modify.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::{Cell, Color, GameState, Piece, Square};

/// A (row, column) step between neighbouring squares on a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction(pub isize, pub isize);

impl Direction {
    #[inline]
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        (self.0 == 0) != (self.1 == 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.0 != 0 && self.0.abs() == self.1.abs()
    }

    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Direction {
        Direction(-self.0, -self.1)
    }

    /// Same line, either sign.
    #[inline]
    #[must_use]
    pub fn is_colinear(self, other: Direction) -> bool {
        self == other || self == other.reversed()
    }
}

pub(crate) const ORTHOGONAL: [Direction; 4] = [
    Direction(-1, 0),
    Direction(0, -1),
    Direction(1, 0),
    Direction(0, 1),
];

pub(crate) const DIAGONAL: [Direction; 4] = [
    Direction(-1, -1),
    Direction(-1, 1),
    Direction(1, -1),
    Direction(1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction(-2, -1),
    Direction(-2, 1),
    Direction(-1, 2),
    Direction(1, 2),
    Direction(2, -1),
    Direction(2, 1),
    Direction(-1, -2),
    Direction(1, -2),
];

/// The eight neighbouring steps, which double as the eight ray directions.
pub(crate) const KING_OFFSETS: [Direction; 8] = [
    Direction(-1, 0),
    Direction(0, -1),
    Direction(1, 0),
    Direction(0, 1),
    Direction(-1, -1),
    Direction(-1, 1),
    Direction(1, -1),
    Direction(1, 1),
];

#[inline]
pub(crate) fn step(sq: Square, dir: Direction, distance: isize) -> Option<Square> {
    sq.offset(dir.0 * distance, dir.1 * distance)
}

/// An allied piece that may only move along `direction` (either sign).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the king; `direction` points from the king
/// towards it (a knight offset for knight checks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

/// Pins and checks relative to one king, computed from scratch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    /// Pin direction for the piece on `sq`, if it is pinned.
    #[must_use]
    pub fn pin_on(&self, sq: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }

    #[inline]
    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }
}

/// Whether an enemy `piece` found `distance` squares from the king along
/// `dir` attacks the king.
fn attacks_along(piece: Piece, enemy: Color, dir: Direction, distance: isize) -> bool {
    match piece {
        Piece::Rook | Piece::Bishop | Piece::Queen => {
            (dir.is_orthogonal() && piece.attacks_straight())
                || (dir.is_diagonal() && piece.attacks_diagonally())
        }
        Piece::King => distance == 1,
        // An enemy pawn attacks from one row "behind" its own advance direction.
        Piece::Pawn => distance == 1 && dir.is_diagonal() && dir.0 == -enemy.pawn_direction(),
        Piece::Knight => false,
    }
}

/// Walk all rays and knight offsets from `king`, treating `ally`'s king as
/// absent so that hypothetical king squares can be evaluated in place.
pub(crate) fn scan(board: &Board, king: Square, ally: Color) -> CheckInfo {
    let enemy = ally.opponent();
    let mut info = CheckInfo::default();

    for dir in KING_OFFSETS {
        let mut candidate: Option<Square> = None;
        for distance in 1..8 {
            let Some(sq) = step(king, dir, distance) else {
                break;
            };
            match board[sq] {
                Cell::Empty => {}
                // Own king is transparent so a hypothetical king square sees past it.
                Cell::Occupied(color, Piece::King) if color == ally => {}
                Cell::Occupied(color, _) if color == ally => {
                    if candidate.is_some() {
                        break;
                    }
                    candidate = Some(sq);
                }
                Cell::Occupied(_, piece) => {
                    if attacks_along(piece, enemy, dir, distance) {
                        match candidate {
                            None => {
                                info.in_check = true;
                                info.checks.push(Check {
                                    square: sq,
                                    direction: dir,
                                });
                            }
                            Some(square) => info.pins.push(Pin {
                                square,
                                direction: dir,
                            }),
                        }
                    }
                    break;
                }
            }
        }
    }

    for offset in KNIGHT_OFFSETS {
        if let Some(sq) = step(king, offset, 1) {
            if board[sq] == Cell::Occupied(enemy, Piece::Knight) {
                info.in_check = true;
                info.checks.push(Check {
                    square: sq,
                    direction: offset,
                });
            }
        }
    }

    info
}

/// True if a `color` king standing on `sq` would be attacked.
#[inline]
pub(crate) fn is_attacked(board: &Board, sq: Square, color: Color) -> bool {
    scan(board, sq, color).in_check
}

impl GameState {
    /// Recompute pins and checks against the side to move's king.
    ///
    /// This is a fresh snapshot; it does not touch any cached state.
    #[must_use]
    pub fn check_for_pins_and_checks(&self) -> CheckInfo {
        let color = self.side_to_move;
        scan(&self.board, self.king_square(color), color)
    }

    /// True if `color`'s king would be attacked standing on `sq`, with the
    /// king itself lifted off its current square.
    #[must_use]
    pub fn is_attacked_from(&self, sq: Square, color: Color) -> bool {
        is_attacked(&self.board, sq, color)
    }

    /// True if `color`'s king is attacked where it stands.
    #[must_use]
    pub fn king_attacked(&self, color: Color) -> bool {
        self.is_attacked_from(self.king_square(color), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameState;

    fn state(fen: &str) -> GameState {
        GameState::try_from_fen(fen).unwrap()
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_is_quiet() {
        let info = GameState::new().check_for_pins_and_checks();
        assert!(!info.in_check);
        assert!(info.pins.is_empty());
        assert!(info.checks.is_empty());
    }

    #[test]
    fn test_file_pin_detected() {
        let info = state("k3r3/8/8/8/8/8/4B3/4K3 w - - 0 1").check_for_pins_and_checks();
        assert!(!info.in_check);
        assert_eq!(
            info.pins,
            vec![Pin {
                square: sq("e2"),
                direction: Direction(-1, 0)
            }]
        );
        assert_eq!(info.pin_on(sq("e2")), Some(Direction(-1, 0)));
    }

    #[test]
    fn test_two_allies_block_pin() {
        let info = state("k3r3/8/8/8/4N3/8/4B3/4K3 w - - 0 1").check_for_pins_and_checks();
        assert!(info.pins.is_empty());
        assert!(!info.in_check);
    }

    #[test]
    fn test_non_attacking_enemy_closes_ray() {
        // The knight on e4 does not attack along the file and shields the king.
        let info = state("k3r3/8/8/8/4n3/8/4B3/4K3 w - - 0 1").check_for_pins_and_checks();
        assert!(info.pins.is_empty());
        assert!(!info.in_check);
    }

    #[test]
    fn test_pawn_checks_only_forward_diagonal() {
        // Black pawn on d2 attacks e1.
        let info = state("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").check_for_pins_and_checks();
        assert!(info.in_check);
        assert_eq!(info.checks[0].square, sq("d2"));

        // A white pawn diagonally above the black king attacks away from it.
        let info = state("8/8/8/8/4P3/3k4/8/K7 b - - 0 1").check_for_pins_and_checks();
        assert!(!info.in_check);

        // White pawn diagonally in front of the black king does.
        let info = state("8/8/8/8/3k4/4P3/8/K7 b - - 0 1").check_for_pins_and_checks();
        assert!(info.in_check);
    }

    #[test]
    fn test_knight_and_ray_double_check() {
        let info = state("4r2k/8/8/8/8/R2n4/8/4K3 w - - 0 1").check_for_pins_and_checks();
        assert!(info.in_check);
        assert!(info.is_double_check());
        let squares: Vec<Square> = info.checks.iter().map(|c| c.square).collect();
        assert!(squares.contains(&sq("e8")));
        assert!(squares.contains(&sq("d3")));
    }

    #[test]
    fn test_king_is_transparent_for_hypothetical_squares() {
        // Stepping back along the rook's file is still attacked.
        let game = state("4r2k/8/8/8/8/8/4K3/8 w - - 0 1");
        assert!(game.is_attacked_from(sq("e1"), Color::White));
        assert!(!game.is_attacked_from(sq("d1"), Color::White));
        assert!(game.king_attacked(Color::White));
    }

    #[test]
    fn test_direction_geometry() {
        assert!(Direction(0, 1).is_orthogonal());
        assert!(!Direction(1, 1).is_orthogonal());
        assert!(Direction(-1, 1).is_diagonal());
        assert!(Direction(1, 0).is_colinear(Direction(-1, 0)));
        assert!(!Direction(1, 0).is_colinear(Direction(1, 1)));
    }

    #[test]
    fn test_slider_attack_lines() {
        let diag = Direction(-1, -1);
        let file = Direction(-1, 0);
        assert!(attacks_along(Piece::Bishop, Color::Black, diag, 5));
        assert!(!attacks_along(Piece::Bishop, Color::Black, file, 1));
        assert!(attacks_along(Piece::Rook, Color::Black, file, 7));
        assert!(!attacks_along(Piece::Rook, Color::Black, diag, 1));
        assert!(attacks_along(Piece::Queen, Color::Black, diag, 3));
        assert!(attacks_along(Piece::Queen, Color::Black, file, 3));
        assert!(!attacks_along(Piece::King, Color::Black, file, 2));
    }

    #[test]
    fn test_own_king_does_not_shield_squares_behind_it() {
        let game = state("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(game.is_attacked_from(Square::at(7, 5), Color::White));
    }
}
