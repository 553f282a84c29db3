//! Bishop, rook, and queen move generation.

use crate::attacks::{BISHOP_DIRECTIONS, KING_OFFSETS, ROOK_DIRECTIONS, slide_targets};
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal moves for a sliding piece of `kind` on `from`.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    us: Color,
    kind: PieceKind,
    list: &mut Vec<Move>,
) {
    let directions: &[(i8, i8)] = match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &KING_OFFSETS,
        _ => return,
    };
    let mut targets = Vec::with_capacity(14);
    slide_targets(board, from, us, directions, &mut targets);
    list.extend(targets.into_iter().map(|to| Move::normal(from, to)));
}
