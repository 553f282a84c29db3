//! King move and castling generation.

use crate::attacks::{KING_OFFSETS, is_square_attacked, step_targets};
use crate::board::Board;
use crate::castle_rights::{CastleSide, king_home};
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal king steps to the eight neighbouring squares.
pub(super) fn gen_king(board: &Board, from: Square, king: Piece, list: &mut Vec<Move>) {
    let mut targets = Vec::with_capacity(8);
    step_targets(board, from, king.color(), &KING_OFFSETS, &mut targets);
    list.extend(targets.into_iter().map(|to| Move::normal(from, to)));
}

/// Generate castling candidates for an unmoved king on its home square.
///
/// A side qualifies when its right is still held, our rook stands on its
/// corner, every square between king and rook is empty, and none of the
/// king's start, transit or landing squares is attacked.
pub(super) fn gen_castles(position: &Position, from: Square, king: Piece, list: &mut Vec<Move>) {
    let us = king.color();
    let them = us.flip();
    let board = position.board();

    if king.has_moved() || from != king_home(us) {
        return;
    }

    for side in CastleSide::ALL {
        if !position.castling().has(us, side) {
            continue;
        }

        let rook_sq = side.rook_home(us);
        if !board
            .piece_at(rook_sq)
            .is_some_and(|p| p.is(PieceKind::Rook, us))
        {
            continue;
        }

        let (low, high) = if rook_sq.col() < from.col() {
            (rook_sq.col(), from.col())
        } else {
            (from.col(), rook_sq.col())
        };
        let path_clear = (low + 1..high).all(|col| board.is_empty(from.with_col(col)));
        if !path_clear {
            continue;
        }

        // The king passes over the square its rook lands on.
        let transit = from.with_col(side.rook_dest_col());
        let dest = from.with_col(side.king_dest_col());
        let king_path_safe = [from, transit, dest]
            .into_iter()
            .all(|sq| !is_square_attacked(board, sq, them));
        if king_path_safe {
            list.push(Move::new(from, dest, MoveKind::Castle(side)));
        }
    }
}
