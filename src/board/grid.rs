//! The 8x8 grid of cells.

use std::fmt;
use std::ops::Index;

use super::types::notation_labels;
use super::{Cell, Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Board cells indexed by [`Square`]; row 0 is Black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Cell::Occupied(Color::Black, piece);
            board.cells[1][col] = Cell::Occupied(Color::Black, Piece::Pawn);
            board.cells[6][col] = Cell::Occupied(Color::White, Piece::Pawn);
            board.cells[7][col] = Cell::Occupied(Color::White, piece);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row()][sq.col()] = cell;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Every occupied square with its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Cell::Occupied(color, piece) => Some((sq, color, piece)),
            Cell::Empty => None,
        })
    }

    /// Squares holding `color`'s king.
    pub fn kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// The raw rows, row 0 first.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, sq: Square) -> &Cell {
        &self.cells[sq.row()][sq.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (files, ranks) = notation_labels();
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", ranks[row])?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in files {
            write!(f, " {file}")?;
        }
        writeln!(f)
    }
}
