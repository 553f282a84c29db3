//! FEN parsing and serialization for [`Position`].
//!
//! FEN carries no per-piece move history, so `has_moved` is rebuilt on load:
//! a pawn off its start row has moved, and a king or rook counts as unmoved
//! only on its home square with a matching castling right.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide, king_home};
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Whether `piece` on `sq` can be treated as never having moved.
fn is_unmoved(piece: Piece, sq: Square, castling: CastleRights) -> bool {
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => sq.row() == color.pawn_row(),
        PieceKind::King => {
            sq == king_home(color)
                && CastleSide::ALL
                    .into_iter()
                    .any(|side| castling.has(color, side))
        }
        PieceKind::Rook => {
            CastleSide::from_rook_home(color, sq).is_some_and(|side| castling.has(color, side))
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    let mut next_id = 0u16;

    // FEN lists rank 8 first, which is row 0.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let kind =
                    PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };

                let sq = Square::new(rank_index as u8, col as u8).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: col + 1,
                })?;
                board.put(sq, Piece::new(next_id, kind, color));
                next_id += 1;
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }

    Ok(board)
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: value.to_string(),
    })
}

impl Position {
    /// Parse a FEN string into a position and the side to move.
    ///
    /// The move counters may be omitted; when present they are validated and
    /// then discarded.
    pub fn from_fen(fen: &str) -> Result<(Position, Color), FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            s => {
                // Only the third and sixth ranks can hold a skipped square.
                let sq = Square::from_algebraic(s)
                    .filter(|sq| sq.row() == 2 || sq.row() == 5)
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: s.to_string(),
                    })?;
                Some(sq)
            }
        };

        if fields.len() == 6 {
            parse_counter("halfmove clock", fields[4])?;
            parse_counter("fullmove number", fields[5])?;
        }

        board.validate()?;

        let pieces: Vec<(Square, Piece)> = board.occupied().collect();
        for (sq, piece) in pieces {
            board.put(sq, piece.with_moved(!is_unmoved(piece, sq, castling)));
        }

        Ok((Position::new(board, castling, en_passant), side_to_move))
    }

    /// Serialize the position as a six-field FEN string.
    ///
    /// Move counters are not tracked and are written as `0 1`.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut placement = String::with_capacity(72);
        for row in 0u8..8 {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match self.piece_at(Square::new_unchecked(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            placement.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        placement.push(piece.fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                placement.push(char::from(b'0' + empty_count));
            }
            if row < 7 {
                placement.push('/');
            }
        }

        let en_passant = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side_to_move} {} {en_passant} 0 1",
            self.castling()
        )
    }
}
