//! The rules-relevant game state: board, castling rights and en-passant target.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::piece::Piece;
use crate::square::Square;

/// One complete position.
///
/// Positions are immutable values. A new one is derived from the previous one
/// only through [`Position::apply_move`] or [`Position::promote`]; queries take
/// `&self` and never change it. Whose turn it is lives with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    castling: CastleRights,
    /// Square skipped by the pawn that double-stepped on the previous half-move.
    en_passant: Option<Square>,
}

impl Position {
    /// Bundle a board with its castling rights and en-passant target.
    pub const fn new(board: Board, castling: CastleRights, en_passant: Option<Square>) -> Position {
        Position {
            board,
            castling,
            en_passant,
        }
    }

    /// The standard starting position with every castling right available.
    pub fn starting_position() -> Position {
        Position::new(Board::starting_position(), CastleRights::ALL, None)
    }

    /// Return the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the castling rights still available.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}
