//! Pseudo-legal generation and the legality filter.
//!
//! Legality is decided by simulation: each candidate is played on a scratch
//! copy of the board and rejected if the mover's king is then attacked.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::make_move::play;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::{gen_castles, gen_king};
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Generate the pseudo-legal moves of the piece on `from`, castling excluded.
///
/// An empty square yields an empty list.
pub fn pseudo_legal_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Move> {
    let mut list = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return list;
    };
    let us = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, piece, en_passant, &mut list),
        PieceKind::Knight => gen_knight(board, from, us, &mut list),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(board, from, us, piece.kind(), &mut list)
        }
        PieceKind::King => gen_king(board, from, piece, &mut list),
    }
    list
}

/// Return `true` if playing `mv` on a copy of `board` leaves `us`'s king unattacked.
///
/// A board without a king of `us` has nothing to protect and passes.
fn keeps_king_safe(board: &Board, mv: Move, us: Color) -> bool {
    let mut scratch = *board;
    play(&mut scratch, mv);
    scratch
        .king_square(us)
        .is_none_or(|king_sq| !is_square_attacked(&scratch, king_sq, us.flip()))
}

impl Position {
    /// Return the legal moves of the piece on `from` for `player`.
    ///
    /// The list is empty when `from` is empty or holds a piece of the other color.
    pub fn legal_moves(&self, from: Square, player: Color) -> Vec<Move> {
        let board = self.board();
        let Some(piece) = board.piece_at(from) else {
            return Vec::new();
        };
        if piece.color() != player {
            return Vec::new();
        }

        let mut candidates = pseudo_legal_moves(board, from, self.en_passant());
        if piece.kind() == PieceKind::King {
            gen_castles(self, from, piece, &mut candidates);
        }

        candidates.retain(|&mv| {
            let safe = keeps_king_safe(board, mv, player);
            if !safe {
                trace!(mv = %mv, "rejected: leaves own king attacked");
            }
            safe
        });
        candidates
    }

    /// Return the destination squares of [`Position::legal_moves`].
    pub fn legal_destinations(&self, from: Square, player: Color) -> Vec<Square> {
        self.legal_moves(from, player)
            .into_iter()
            .map(|mv| mv.to())
            .collect()
    }

    /// Return every legal move for `player`, piece by piece in board order.
    pub fn all_legal_moves(&self, player: Color) -> Vec<Move> {
        self.board()
            .pieces(player)
            .flat_map(|(from, _)| self.legal_moves(from, player))
            .collect()
    }

    /// Resolve a `from`/`to` pair to the legal move it denotes, if any.
    pub fn find_move(&self, from: Square, to: Square, player: Color) -> Option<Move> {
        self.legal_moves(from, player)
            .into_iter()
            .find(|mv| mv.to() == to)
    }
}
