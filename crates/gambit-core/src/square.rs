//! Board squares addressed by (row, column).

use std::fmt;

/// A square on the chess board.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1). Column 0 is the a-file. Both coordinates are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Parse an algebraic name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Return the row, 0 being Black's back rank.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column, 0 being the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the zero-based index `row * 8 + col` (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step by a row/column delta, returning `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The square in the same row at column `col`.
    #[inline]
    pub(crate) const fn with_col(self, col: u8) -> Square {
        Square::new_unchecked(self.row, col)
    }

    /// Iterate over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square::new_unchecked(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
