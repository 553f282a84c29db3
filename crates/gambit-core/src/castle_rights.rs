//! Castling rights stored as a 4-bit field within a `u8`.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of this side's rook before castling.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on, next to the king on its inner side.
    #[inline]
    pub const fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Home square of `color`'s rook for this side.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::new_unchecked(color.back_row(), self.rook_col())
    }

    /// The side whose rook starts on `sq`, if `sq` is one of `color`'s rook corners.
    pub fn from_rook_home(color: Color, sq: Square) -> Option<CastleSide> {
        CastleSide::ALL
            .into_iter()
            .find(|side| side.rook_home(color) == sq)
    }
}

/// Home square of `color`'s king.
#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new_unchecked(color.back_row(), 4)
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights are only ever removed during a game; nothing in the move path
/// inserts a right.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights, as at the start of a game.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White king-side castling.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// White queen-side castling.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// Black king-side castling.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// Black queen-side castling.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with all bits from `other` added.
    #[inline]
    const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return new rights with all bits from `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side can still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Return new rights without the given color and side.
    #[inline]
    pub const fn revoke(self, color: Color, side: CastleSide) -> CastleRights {
        self.remove(Self::flag(color, side))
    }

    /// Remove both castling rights for the given color.
    #[inline]
    pub const fn revoke_color(self, color: Color) -> CastleRights {
        self.revoke(color, CastleSide::KingSide)
            .revoke(color, CastleSide::QueenSide)
    }

    /// Return the single-bit flag for a color and side.
    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Parse castling rights from the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }

    /// Serialize castling rights to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ]
        .into_iter()
        .filter(|&(flag, _)| self.contains(flag))
        .map(|(_, c)| c)
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
