//! Move execution via copy-make.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::{PieceKind, PromotionPiece};
use crate::position::Position;
use crate::square::Square;

/// Everything [`Position::apply_move`] reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The position after the move.
    pub position: Position,
    /// The piece taken by the move. For en passant this pawn stood beside
    /// the mover, not on the destination square.
    pub captured: Option<Piece>,
    /// Set when a pawn reached its last row and no promotion piece was given.
    /// Finish it with [`Position::promote`].
    pub pending_promotion: Option<Square>,
}

/// Relocate the pieces `mv` moves on `board` and return the captured piece.
///
/// Marks the mover (and the castling rook) as moved and removes an en passant
/// victim from its own square. Promotion choice, castling rights and the en
/// passant target are left to the caller. An empty source is a no-op.
pub(crate) fn play(board: &mut Board, mv: Move) -> Option<Piece> {
    let piece = board.take(mv.from())?;
    let mut captured = board.take(mv.to());
    board.put(mv.to(), piece.moved());

    match mv.kind() {
        MoveKind::EnPassant => {
            let victim_sq = mv.to().offset(-piece.color().forward(), 0);
            captured = victim_sq.and_then(|sq| board.take(sq));
        }
        MoveKind::Castle(side) => {
            let rook_sq = side.rook_home(piece.color());
            if let Some(rook) = board.take(rook_sq) {
                board.put(mv.to().with_col(side.rook_dest_col()), rook.moved());
            }
        }
        MoveKind::Normal | MoveKind::DoublePush | MoveKind::Promotion => {}
    }

    captured
}

/// Castling rights after `mover` (as it stood before the move) plays `mv`.
fn updated_castling(
    rights: CastleRights,
    mover: Piece,
    mv: Move,
    captured: Option<Piece>,
) -> CastleRights {
    let us = mover.color();
    let mut rights = match mover.kind() {
        PieceKind::King => rights.revoke_color(us),
        PieceKind::Rook if !mover.has_moved() => CastleSide::from_rook_home(us, mv.from())
            .map_or(rights, |side| rights.revoke(us, side)),
        _ => rights,
    };

    // A rook taken on its corner loses its right even though it never moved.
    if let Some(victim) = captured.filter(|p| p.kind() == PieceKind::Rook) {
        if let Some(side) = CastleSide::from_rook_home(victim.color(), mv.to()) {
            rights = rights.revoke(victim.color(), side);
        }
    }

    rights
}

impl Position {
    /// Apply a legal move and return the resulting position.
    ///
    /// `mv` must come from [`Position::legal_moves`]; it is not re-validated.
    /// `promotion` is only consulted for [`MoveKind::Promotion`] moves; without
    /// it the pawn is left on the last row and the square is reported in
    /// [`MoveOutcome::pending_promotion`].
    pub fn apply_move(&self, mv: Move, promotion: Option<PromotionPiece>) -> MoveOutcome {
        let mut board = *self.board();

        let Some(mover) = board.piece_at(mv.from()) else {
            debug_assert!(false, "apply_move from empty square {}", mv.from());
            return MoveOutcome {
                position: *self,
                captured: None,
                pending_promotion: None,
            };
        };

        let captured = play(&mut board, mv);

        let mut pending_promotion = None;
        if mv.is_promotion() {
            match promotion {
                Some(choice) => {
                    board.put(mv.to(), mover.moved().promoted(choice.to_piece_kind()));
                }
                None => pending_promotion = Some(mv.to()),
            }
        }

        let en_passant = match mv.kind() {
            MoveKind::DoublePush => mv.from().offset(mover.color().forward(), 0),
            _ => None,
        };

        // A pawn capture cannot touch castling rights, so en passant skips the recompute.
        if mv.is_en_passant() {
            debug!(mv = %mv, captured = ?captured, "en passant");
            return MoveOutcome {
                position: Position::new(board, self.castling(), None),
                captured,
                pending_promotion: None,
            };
        }

        let castling = updated_castling(self.castling(), mover, mv, captured);
        if castling != self.castling() {
            trace!(before = %self.castling(), after = %castling, "castling rights revoked");
        }

        debug!(
            mv = %mv,
            captured = ?captured,
            pending_promotion = ?pending_promotion,
            "move applied"
        );

        MoveOutcome {
            position: Position::new(board, castling, en_passant),
            captured,
            pending_promotion,
        }
    }

    /// Complete a deferred promotion by replacing the pawn on `sq`.
    ///
    /// Only the piece's kind changes; rights, en passant target and every
    /// other square are untouched. A square without a pawn on its last row
    /// is left as is.
    pub fn promote(&self, sq: Square, choice: PromotionPiece) -> Position {
        let mut board = *self.board();
        match board.piece_at(sq) {
            Some(pawn)
                if pawn.kind() == PieceKind::Pawn && sq.row() == pawn.color().promotion_row() =>
            {
                board.put(sq, pawn.promoted(choice.to_piece_kind()));
                debug!(square = %sq, piece = %choice, "promotion completed");
            }
            other => {
                debug_assert!(false, "no pawn to promote on {sq}: {other:?}");
                return *self;
            }
        }
        Position::new(board, self.castling(), self.en_passant())
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::CastleRights;
    use crate::chess_move::{Move, MoveKind};
    use crate::color::Color;
    use crate::piece_kind::{PieceKind, PromotionPiece};
    use crate::position::Position;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn fen(s: &str) -> Position {
        Position::from_fen(s).unwrap().0
    }

    /// Play a coordinate move for `player`, panicking if it is not legal.
    fn play(pos: &Position, player: Color, from: &str, to: &str) -> Position {
        let mv = pos
            .find_move(sq(from), sq(to), player)
            .unwrap_or_else(|| panic!("{from}{to} is not legal"));
        pos.apply_move(mv, None).position
    }

    #[test]
    fn normal_pawn_push_sets_en_passant() {
        let pos = Position::starting_position();
        let after = play(&pos, Color::White, "e2", "e4");

        let pawn = after.piece_at(sq("e4")).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));
        assert!(pawn.has_moved());
        assert!(after.piece_at(sq("e2")).is_none());
        assert_eq!(after.en_passant(), Some(sq("e3")));
        assert!(!pos.piece_at(sq("e2")).unwrap().has_moved(), "input untouched");
    }

    #[test]
    fn single_push_clears_en_passant() {
        let pos = play(&Position::starting_position(), Color::White, "e2", "e4");
        let after = play(&pos, Color::Black, "a7", "a6");
        assert_eq!(after.en_passant(), None);
    }

    #[test]
    fn capture_reports_piece() {
        // 1.e4 d5 2.exd5
        let pos = Position::starting_position();
        let pos = play(&pos, Color::White, "e2", "e4");
        let pos = play(&pos, Color::Black, "d7", "d5");
        let mv = pos.find_move(sq("e4"), sq("d5"), Color::White).unwrap();
        let outcome = pos.apply_move(mv, None);

        let captured = outcome.captured.unwrap();
        assert!(captured.is(PieceKind::Pawn, Color::Black));
        assert!(outcome.position.piece_at(sq("d5")).unwrap().is(PieceKind::Pawn, Color::White));
        assert_eq!(outcome.position.en_passant(), None);
    }

    #[test]
    fn en_passant_capture_removes_pawn_behind_target() {
        // 1.e4 a6 2.e5 d5 3.exd6 e.p.
        let pos = Position::starting_position();
        let pos = play(&pos, Color::White, "e2", "e4");
        let pos = play(&pos, Color::Black, "a7", "a6");
        let pos = play(&pos, Color::White, "e4", "e5");
        let pos = play(&pos, Color::Black, "d7", "d5");
        assert_eq!(pos.en_passant(), Some(sq("d6")));

        let mv = pos.find_move(sq("e5"), sq("d6"), Color::White).unwrap();
        assert_eq!(mv.kind(), MoveKind::EnPassant);
        let outcome = pos.apply_move(mv, None);

        assert!(outcome.captured.unwrap().is(PieceKind::Pawn, Color::Black));
        assert!(outcome.position.piece_at(sq("d5")).is_none());
        assert!(outcome.position.piece_at(sq("d6")).unwrap().is(PieceKind::Pawn, Color::White));
        assert_eq!(outcome.position.en_passant(), None);
        assert_eq!(outcome.position.castling(), CastleRights::ALL);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let after = play(&pos, Color::White, "e1", "g1");

        assert!(after.piece_at(sq("g1")).unwrap().is(PieceKind::King, Color::White));
        let rook = after.piece_at(sq("f1")).unwrap();
        assert!(rook.is(PieceKind::Rook, Color::White));
        assert!(rook.has_moved());
        assert!(after.piece_at(sq("h1")).is_none());
        assert!(after.piece_at(sq("e1")).is_none());
        assert_eq!(after.castling().to_fen(), "kq");
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let after = play(&pos, Color::Black, "e8", "c8");

        assert!(after.piece_at(sq("c8")).unwrap().is(PieceKind::King, Color::Black));
        assert!(after.piece_at(sq("d8")).unwrap().is(PieceKind::Rook, Color::Black));
        assert!(after.piece_at(sq("a8")).is_none());
        assert_eq!(after.castling().to_fen(), "KQ");
    }

    #[test]
    fn rook_move_revokes_its_side() {
        let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let after = play(&pos, Color::White, "a1", "a4");
        assert_eq!(after.castling().to_fen(), "Kkq");
        // Moving back home does not restore the right.
        let back = play(&after, Color::White, "a4", "a1");
        assert_eq!(back.castling().to_fen(), "Kkq");
    }

    #[test]
    fn capturing_home_rook_revokes_victims_right() {
        let pos = fen("r3k2r/8/8/8/8/8/1B6/R3K2R w KQkq - 0 1");
        let outcome = pos.apply_move(pos.find_move(sq("b2"), sq("h8"), Color::White).unwrap(), None);
        assert!(outcome.captured.unwrap().is(PieceKind::Rook, Color::Black));
        assert_eq!(outcome.position.castling().to_fen(), "KQq");
    }

    #[test]
    fn rook_takes_rook_revokes_both() {
        let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let after = play(&pos, Color::White, "h1", "h8");
        assert_eq!(after.castling().to_fen(), "Qq");
    }

    #[test]
    fn promotion_with_choice() {
        let pos = fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let id = pos.piece_at(sq("a7")).unwrap().id();
        let mv = Move::new(sq("a7"), sq("a8"), MoveKind::Promotion);
        let outcome = pos.apply_move(mv, Some(PromotionPiece::Knight));

        let knight = outcome.position.piece_at(sq("a8")).unwrap();
        assert!(knight.is(PieceKind::Knight, Color::White));
        assert_eq!(knight.id(), id);
        assert_eq!(outcome.pending_promotion, None);
    }

    #[test]
    fn promotion_deferred_then_completed() {
        let pos = fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = Move::new(sq("a7"), sq("a8"), MoveKind::Promotion);
        let outcome = pos.apply_move(mv, None);

        assert_eq!(outcome.pending_promotion, Some(sq("a8")));
        let pawn = outcome.position.piece_at(sq("a8")).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));

        let done = outcome.position.promote(sq("a8"), PromotionPiece::Queen);
        assert!(done.piece_at(sq("a8")).unwrap().is(PieceKind::Queen, Color::White));
        assert_eq!(done.castling(), outcome.position.castling());
        assert_eq!(done.en_passant(), outcome.position.en_passant());
        for s in Square::all().filter(|&s| s != sq("a8")) {
            assert_eq!(done.piece_at(s), outcome.position.piece_at(s), "{s} changed");
        }
    }

    #[test]
    fn promotion_capture_on_rook_corner_revokes() {
        let pos = fen("r3k2r/1P6/8/8/8/8/8/4K3 w kq - 0 1");
        let mv = pos.find_move(sq("b7"), sq("a8"), Color::White).unwrap();
        let outcome = pos.apply_move(mv, Some(PromotionPiece::Queen));
        assert_eq!(outcome.position.castling().to_fen(), "k");
    }
}
