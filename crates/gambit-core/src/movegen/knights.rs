//! Knight move generation.

use crate::attacks::{KNIGHT_OFFSETS, step_targets};
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Generate pseudo-legal knight moves from `from`.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut Vec<Move>) {
    let mut targets = Vec::with_capacity(8);
    step_targets(board, from, us, &KNIGHT_OFFSETS, &mut targets);
    list.extend(targets.into_iter().map(|to| Move::normal(from, to)));
}
