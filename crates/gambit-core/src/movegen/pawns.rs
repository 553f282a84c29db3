//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal moves for `pawn` standing on `from`.
pub(super) fn gen_pawn(
    board: &Board,
    from: Square,
    pawn: Piece,
    en_passant: Option<Square>,
    list: &mut Vec<Move>,
) {
    let us = pawn.color();
    let forward = us.forward();
    let advance = |to: Square| {
        if to.row() == us.promotion_row() {
            Move::new(from, to, MoveKind::Promotion)
        } else {
            Move::normal(from, to)
        }
    };

    // --- Pushes ---
    if let Some(single) = from.offset(forward, 0).filter(|&sq| board.is_empty(sq)) {
        list.push(advance(single));

        let on_start_row = from.row() == us.pawn_row() && !pawn.has_moved();
        if on_start_row {
            if let Some(double) = single.offset(forward, 0).filter(|&sq| board.is_empty(sq)) {
                list.push(Move::new(from, double, MoveKind::DoublePush));
            }
        }
    }

    // --- Captures ---
    for to in pawn_attacks(from, us) {
        match board.color_at(to) {
            Some(color) if color != us => list.push(advance(to)),
            None if en_passant == Some(to) => {
                // The double-stepped pawn stands beside us, one row behind the target.
                let victim_sq = to.offset(-forward, 0);
                let victim = victim_sq.and_then(|sq| board.piece_at(sq));
                if victim.is_some_and(|p| p.is(PieceKind::Pawn, us.flip())) {
                    list.push(Move::new(from, to, MoveKind::EnPassant));
                }
            }
            _ => {}
        }
    }
}
