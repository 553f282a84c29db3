//! Core chess rules: board representation, move generation, and game status.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod status;

pub use attacks::{attacked_squares, is_square_attacked, pawn_attacks};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide, king_home};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use make_move::MoveOutcome;
pub use movegen::pseudo_legal_moves;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::{PieceKind, PromotionPiece};
pub use position::Position;
pub use square::Square;
pub use status::{GameStatus, is_in_check};
