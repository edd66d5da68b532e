//! Rank/row and file/column lookup tables.
//!
//! Built once on first use and never mutated afterwards. Row 0 is rank 8
//! (Black's back rank) and column 0 is file 'a'.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(crate) static RANKS_TO_ROWS: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    ('1'..='8')
        .enumerate()
        .map(|(i, rank)| (rank, 7 - i))
        .collect()
});

pub(crate) static ROWS_TO_RANKS: Lazy<[char; 8]> = Lazy::new(|| {
    let mut ranks = ['?'; 8];
    for (&rank, &row) in RANKS_TO_ROWS.iter() {
        ranks[row] = rank;
    }
    ranks
});

pub(crate) static FILES_TO_COLS: Lazy<HashMap<char, usize>> =
    Lazy::new(|| ('a'..='h').enumerate().map(|(i, file)| (file, i)).collect());

pub(crate) static COLS_TO_FILES: Lazy<[char; 8]> = Lazy::new(|| {
    let mut files = ['?'; 8];
    for (&file, &col) in FILES_TO_COLS.iter() {
        files[col] = file;
    }
    files
});

#[inline]
pub(crate) fn row_for_rank(rank: char) -> Option<usize> {
    RANKS_TO_ROWS.get(&rank).copied()
}

#[inline]
pub(crate) fn col_for_file(file: char) -> Option<usize> {
    FILES_TO_COLS.get(&file).copied()
}

/// File letters by column and rank digits by row, for labelling diagrams.
pub(crate) fn notation_labels() -> (&'static [char; 8], &'static [char; 8]) {
    (&*COLS_TO_FILES, &*ROWS_TO_RANKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_inverse() {
        for row in 0..8 {
            assert_eq!(row_for_rank(ROWS_TO_RANKS[row]), Some(row));
        }
        for col in 0..8 {
            assert_eq!(col_for_file(COLS_TO_FILES[col]), Some(col));
        }
    }

    #[test]
    fn test_orientation() {
        assert_eq!(row_for_rank('1'), Some(7));
        assert_eq!(row_for_rank('8'), Some(0));
        assert_eq!(col_for_file('a'), Some(0));
        assert_eq!(col_for_file('h'), Some(7));
        assert_eq!(row_for_rank('9'), None);
        assert_eq!(col_for_file('i'), None);
    }
}
