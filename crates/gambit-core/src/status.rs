//! Check, checkmate and stalemate queries.

use std::fmt;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// The state of the game from the point of view of the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if `color`'s king is attacked by the other side.
///
/// A board without a king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king_sq| is_square_attacked(board, king_sq, color.flip()))
}

impl Position {
    /// Return `true` if `color`'s king is attacked.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(self.board(), color)
    }

    /// Return `true` if any piece of `color` has a legal move.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.board()
            .pieces(color)
            .any(|(from, _)| !self.legal_moves(from, color).is_empty())
    }

    /// Return `true` if `color` is in check with no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Return `true` if `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Classify the position for `color`, the side to move, in one pass.
    pub fn status(&self, color: Color) -> GameStatus {
        match (self.is_in_check(color), self.has_any_legal_move(color)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameStatus, is_in_check};
    use crate::board::Board;
    use crate::color::Color;
    use crate::position::Position;

    fn fen(s: &str) -> Position {
        Position::from_fen(s).unwrap().0
    }

    #[test]
    fn starting_position_is_ongoing() {
        let pos = Position::starting_position();
        assert_eq!(pos.status(Color::White), GameStatus::Ongoing);
        assert_eq!(pos.status(Color::Black), GameStatus::Ongoing);
    }

    #[test]
    fn check_with_escape() {
        let pos = fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(pos.is_in_check(Color::White));
        assert!(!pos.is_in_check(Color::Black));
        assert_eq!(pos.status(Color::White), GameStatus::Check);
        assert!(!pos.is_checkmate(Color::White));
    }

    #[test]
    fn back_rank_mate() {
        let pos = fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(pos.is_checkmate(Color::Black));
        assert!(!pos.is_stalemate(Color::Black));
        assert_eq!(pos.status(Color::Black), GameStatus::Checkmate);
        assert!(GameStatus::Checkmate.is_game_over());
    }

    #[test]
    fn queen_stalemate() {
        let pos = fen("8/8/8/8/8/6k1/5q2/7K w - - 0 1");
        assert!(pos.is_stalemate(Color::White));
        assert!(!pos.is_checkmate(Color::White));
        assert_eq!(pos.status(Color::White), GameStatus::Stalemate);
    }

    #[test]
    fn missing_king_is_not_in_check() {
        assert!(!is_in_check(&Board::empty(), Color::White));
    }

    #[test]
    fn display() {
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate");
        assert!(!GameStatus::Check.is_game_over());
    }
}
