//! Chess move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::square::Square;

/// The category of a chess move, decided when the move is generated.
///
/// Application dispatches on this tag instead of re-deriving special moves
/// from coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture on the destination square.
    Normal,
    /// A pawn's two-square advance from its start row.
    DoublePush,
    /// A pawn capture onto the en-passant target; the captured pawn stands
    /// one row behind the destination.
    EnPassant,
    /// The king's two-square castling move; the rook's move is implied.
    Castle(CastleSide),
    /// A pawn move onto the last row. The replacement piece is supplied when
    /// the move is applied, or later.
    Promotion,
}

/// A move of one piece from `from` to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a move of the given kind.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// Create a normal (quiet or capture) move.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Move {
        Move::new(from, to, MoveKind::Normal)
    }

    /// Extract the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Extract the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Extract the move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
