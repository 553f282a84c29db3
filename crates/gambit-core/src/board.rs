//! The 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, indexed `cells[row][col]`.
///
/// Each piece is owned by exactly one cell. `Board` is `Copy`, and since
/// [`Piece`] is a value type every copy is a deep copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    ///
    /// Piece ids are handed out in board order, a8 first, so Black's pieces
    /// get 0..16 and White's get 16..32.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        let mut next_id = 0u16;
        let mut place = |board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color| {
            board.put(Square::new_unchecked(row, col), Piece::new(next_id, kind, color));
            next_id += 1;
        };

        for (col, kind) in (0u8..).zip(BACK_RANK) {
            place(&mut board, Color::Black.back_row(), col, kind, Color::Black);
        }
        for col in 0u8..8 {
            place(&mut board, Color::Black.pawn_row(), col, PieceKind::Pawn, Color::Black);
        }
        for col in 0u8..8 {
            place(&mut board, Color::White.pawn_row(), col, PieceKind::Pawn, Color::White);
        }
        for (col, kind) in (0u8..).zip(BACK_RANK) {
            place(&mut board, Color::White.back_row(), col, kind, Color::White);
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Iterate over every occupied square with its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares and pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of the king for the given side.
    ///
    /// `None` only for malformed positions, which the rules never produce.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.occupied().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self.pretty())?;
        write!(f, "}}")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = board
                    .piece_at(Square::new_unchecked(row, col))
                    .map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
