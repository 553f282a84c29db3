//! Perft (performance test) for move generation correctness verification.
//!
//! A promotion move counts once per choice of promoted piece, so the totals
//! line up with the published reference numbers.

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PromotionPiece;
use crate::position::Position;

/// Expand a legal move into the `(move, promotion)` pairs it stands for.
fn expansions(mv: Move) -> Vec<(Move, Option<PromotionPiece>)> {
    if mv.is_promotion() {
        PromotionPiece::ALL.into_iter().map(|p| (mv, Some(p))).collect()
    } else {
        vec![(mv, None)]
    }
}

/// Count the number of leaf nodes at the given depth with `side` to move.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(position: &Position, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.all_legal_moves(side);

    if depth == 1 {
        return moves
            .iter()
            .map(|mv| if mv.is_promotion() { 4 } else { 1 })
            .sum();
    }

    let mut nodes = 0u64;
    for (mv, promotion) in moves.into_iter().flat_map(expansions) {
        let child = position.apply_move(mv, promotion).position;
        nodes += perft(&child, side.flip(), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically,
/// with the promotion letter appended to promotion moves.
pub fn divide(position: &Position, side: Color, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .all_legal_moves(side)
        .into_iter()
        .flat_map(expansions)
        .map(|(mv, promotion)| {
            let child = position.apply_move(mv, promotion).position;
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            let name = match promotion {
                Some(p) => format!("{mv}{}", p.to_char()),
                None => mv.to_string(),
            };
            (name, count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(fen: &str) -> (Position, Color) {
        Position::from_fen(fen).unwrap()
    }

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Color::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Color::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Color::White, 4), 197_281);
    }

    // --- Position 2: Kiwipete ---

    fn kiwipete() -> (Position, Color) {
        load("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        let (pos, side) = kiwipete();
        assert_eq!(perft(&pos, side, 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        let (pos, side) = kiwipete();
        assert_eq!(perft(&pos, side, 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        let (pos, side) = kiwipete();
        assert_eq!(perft(&pos, side, 3), 97_862);
    }

    // --- Position 3 ---

    fn position3() -> (Position, Color) {
        load("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
    }

    #[test]
    fn perft_pos3_depth_1() {
        let (pos, side) = position3();
        assert_eq!(perft(&pos, side, 1), 14);
    }

    #[test]
    fn perft_pos3_depth_2() {
        let (pos, side) = position3();
        assert_eq!(perft(&pos, side, 2), 191);
    }

    #[test]
    fn perft_pos3_depth_3() {
        let (pos, side) = position3();
        assert_eq!(perft(&pos, side, 3), 2_812);
    }

    // --- Position 4 ---

    fn position4() -> (Position, Color) {
        load("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
    }

    #[test]
    fn perft_pos4_depth_1() {
        let (pos, side) = position4();
        assert_eq!(perft(&pos, side, 1), 6);
    }

    #[test]
    fn perft_pos4_depth_2() {
        let (pos, side) = position4();
        assert_eq!(perft(&pos, side, 2), 264);
    }

    #[test]
    #[ignore] // slow
    fn perft_pos4_depth_3() {
        let (pos, side) = position4();
        assert_eq!(perft(&pos, side, 3), 9_467);
    }

    // --- Position 5 ---

    fn position5() -> (Position, Color) {
        load("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
    }

    #[test]
    fn perft_pos5_depth_1() {
        let (pos, side) = position5();
        assert_eq!(perft(&pos, side, 1), 44);
    }

    #[test]
    fn perft_pos5_depth_2() {
        let (pos, side) = position5();
        assert_eq!(perft(&pos, side, 2), 1_486);
    }

    #[test]
    #[ignore] // slow
    fn perft_pos5_depth_3() {
        let (pos, side) = position5();
        assert_eq!(perft(&pos, side, 3), 62_379);
    }

    // --- divide ---

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&Position::starting_position(), Color::White, 1);
        assert_eq!(results.len(), 20);
        for (_, count) in &results {
            assert_eq!(*count, 1);
        }
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn divide_names_each_promotion() {
        let (pos, side) = load("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        let names: Vec<String> = divide(&pos, side, 1)
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| name.starts_with("b7"))
            .collect();
        assert_eq!(names, vec!["b7b8b", "b7b8n", "b7b8q", "b7b8r"]);
    }

    #[test]
    fn divide_sums_to_perft() {
        let (pos, side) = kiwipete();
        let total: u64 = divide(&pos, side, 2).iter().map(|(_, n)| n).sum();
        assert_eq!(total, 2_039);
    }

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Position::starting_position(), Color::White, 0), 1);
    }
}
