//! A piece standing on the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece together with its per-game identity and move history.
///
/// `Piece` is a plain value: copying a board copies every piece, so a
/// `has_moved` change on a scratch board never reaches the board it was
/// copied from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: u16,
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(id: u16, kind: PieceKind, color: Color) -> Piece {
        Piece {
            id,
            kind,
            color,
            has_moved: false,
        }
    }

    /// Stable identifier, unique within a game. Not used by the rules.
    #[inline]
    pub const fn id(self) -> u16 {
        self.id
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Whether this piece has moved since the game started.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return `true` if this piece has the given kind and color.
    #[inline]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind as u8 == kind as u8 && self.color as u8 == color as u8
    }

    /// Return this piece marked as moved.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Return this piece with its `has_moved` flag set to `has_moved`.
    #[inline]
    pub const fn with_moved(self, has_moved: bool) -> Piece {
        Piece { has_moved, ..self }
    }

    /// Return this piece as a different kind, keeping id, color and history.
    #[inline]
    pub const fn promoted(self, kind: PieceKind) -> Piece {
        Piece { kind, ..self }
    }

    /// Return the FEN character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.fen_char().to_ascii_uppercase();
        write!(f, "{color_prefix}{kind_char}#{}", self.id)?;
        if self.has_moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}
