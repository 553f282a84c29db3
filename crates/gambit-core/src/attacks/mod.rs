//! Attack generation: per-piece reach on the grid and the square-attacked query.
//!
//! Every function here walks the board cell by cell. Each candidate square is
//! produced through [`Square::offset`], so off-board targets never appear.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The eight L-shaped knight jumps as (row, col) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight neighbouring squares, which are also the queen's ray directions.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Push every square one `offsets` step away from `from` that is not held by `color`.
pub(crate) fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| board.color_at(to) != Some(color)),
    );
}

/// Push every square a slider of `color` on `from` reaches along `directions`.
///
/// A ray includes each empty square, includes the first opposing piece and
/// stops there, and stops before the first friendly piece.
pub(crate) fn slide_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.color_at(to) {
                None => out.push(to),
                Some(c) if c != color => {
                    out.push(to);
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// Return the (up to two) forward diagonals a pawn of `color` on `from` guards.
///
/// Occupancy is irrelevant: an empty diagonal is still guarded.
pub fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

/// Push the squares `piece` on `from` attacks.
///
/// Matches pseudo-legal generation for every kind except the pawn, whose
/// diagonals count regardless of occupancy and whose pushes attack nothing.
pub(crate) fn piece_attacks(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => out.extend(pawn_attacks(from, color)),
        PieceKind::Knight => step_targets(board, from, color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => slide_targets(board, from, color, &BISHOP_DIRECTIONS, out),
        PieceKind::Rook => slide_targets(board, from, color, &ROOK_DIRECTIONS, out),
        PieceKind::Queen => slide_targets(board, from, color, &KING_OFFSETS, out),
        PieceKind::King => step_targets(board, from, color, &KING_OFFSETS, out),
    }
}

/// Return the squares attacked by the piece on `from`; empty if `from` is empty.
pub fn attacked_squares(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(piece) = board.piece_at(from) {
        piece_attacks(board, from, piece, &mut out);
    }
    out
}

/// Return `true` if any piece of `by_color` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);
    board.pieces(by_color).any(|(from, piece)| {
        scratch.clear();
        piece_attacks(board, from, piece, &mut scratch);
        scratch.contains(&sq)
    })
}
