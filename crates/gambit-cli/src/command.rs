//! Host command parsing.

use gambit_core::{Color, Position, PromotionPiece, Square};

use crate::error::CliError;

/// A runtime option changed with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Promote to a queen when a move gives no promotion piece.
    AutoQueen(bool),
    /// Print the board after each committed move.
    Board(bool),
}

/// A parsed host command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard position.
    New,
    /// `fen` -- load a position and its side to move.
    Fen {
        /// The parsed position.
        position: Position,
        /// The side to move named in the FEN.
        side: Color,
    },
    /// `show` -- print the board and FEN.
    Show,
    /// `moves` -- list the legal destinations of one piece.
    Moves(Square),
    /// `move` -- play a move, optionally naming the promotion piece.
    Move {
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    },
    /// `promote` -- complete a pending promotion.
    Promote(PromotionPiece),
    /// `status` -- report check, checkmate or stalemate.
    Status,
    /// `set` -- change a session option.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single line of host input into a [`Command`].
///
/// Blank lines are reported as `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name {
        "new" => Command::New,
        "show" => Command::Show,
        "status" => Command::Status,
        "quit" => Command::Quit,
        "fen" => parse_fen(args)?,
        "moves" => Command::Moves(parse_square(first_arg(args, "moves")?)?),
        "move" => parse_move(first_arg(args, "move")?)?,
        "promote" => Command::Promote(parse_promotion(first_arg(args, "promote")?)?),
        "set" => Command::Set(parse_option(args)?),
        other => {
            return Err(CliError::UnknownCommand {
                command: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

fn first_arg<'a>(args: &[&'a str], command: &'static str) -> Result<&'a str, CliError> {
    args.first()
        .copied()
        .ok_or(CliError::MissingArgument { command })
}

fn parse_square(text: &str) -> Result<Square, CliError> {
    Square::from_algebraic(text).ok_or_else(|| CliError::UnknownSquare {
        square: text.to_string(),
    })
}

fn parse_promotion(text: &str) -> Result<PromotionPiece, CliError> {
    let mut chars = text.chars();
    let piece = match (chars.next(), chars.next()) {
        (Some(c), None) => PromotionPiece::from_char(c),
        _ => None,
    };
    piece.ok_or_else(|| CliError::InvalidPromotion {
        text: text.to_string(),
    })
}

/// Parse the `fen` command arguments (4 or 6 FEN fields).
fn parse_fen(args: &[&str]) -> Result<Command, CliError> {
    if args.is_empty() {
        return Err(CliError::MissingArgument { command: "fen" });
    }
    let (position, side) = Position::from_fen(&args.join(" "))?;
    Ok(Command::Fen { position, side })
}

/// Parse coordinate notation: `e2e4`, or `e7e8q` with a promotion letter.
fn parse_move(text: &str) -> Result<Command, CliError> {
    let invalid = || CliError::InvalidMove {
        text: text.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text.get(4..) {
        Some("") | None => None,
        Some(letter) => Some(parse_promotion(letter)?),
    };

    Ok(Command::Move {
        from,
        to,
        promotion,
    })
}

/// Parse `set <name> <value>`.
fn parse_option(args: &[&str]) -> Result<SessionOption, CliError> {
    let (name, value) = match args {
        [name, value] => (*name, *value),
        [] => return Err(CliError::MissingArgument { command: "set" }),
        _ => {
            return Err(CliError::InvalidOption {
                name: args[0].to_string(),
                value: args[1..].join(" "),
            });
        }
    };
    let invalid = || CliError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
    };

    let flag = match value {
        "true" | "on" => true,
        "false" | "off" => false,
        _ => return Err(invalid()),
    };

    match name.to_ascii_lowercase().as_str() {
        "autoqueen" => Ok(SessionOption::AutoQueen(flag)),
        "board" => Ok(SessionOption::Board(flag)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse("new"), Command::New));
        assert!(matches!(parse("show"), Command::Show));
        assert!(matches!(parse("status"), Command::Status));
        assert!(matches!(parse("  quit  "), Command::Quit));
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   ").unwrap().is_none());
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(
            parse_command("foobar"),
            Err(CliError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn parse_plain_move() {
        match parse("move e2e4") {
            Command::Move {
                from,
                to,
                promotion,
            } => {
                assert_eq!(from, sq("e2"));
                assert_eq!(to, sq("e4"));
                assert!(promotion.is_none());
            }
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn parse_promotion_move() {
        match parse("move a7a8N") {
            Command::Move { promotion, .. } => {
                assert_eq!(promotion, Some(PromotionPiece::Knight));
            }
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn parse_bad_moves() {
        for line in ["move e2", "move e2e9", "move e2e4e5", "move z2e4"] {
            assert!(
                matches!(parse_command(line), Err(CliError::InvalidMove { .. })),
                "{line} should be rejected"
            );
        }
        assert!(matches!(
            parse_command("move e7e8k"),
            Err(CliError::InvalidPromotion { .. })
        ));
        assert!(matches!(
            parse_command("move"),
            Err(CliError::MissingArgument { command: "move" })
        ));
    }

    #[test]
    fn parse_moves_query() {
        assert!(matches!(parse("moves g1"), Command::Moves(s) if s == sq("g1")));
        assert!(matches!(
            parse_command("moves i9"),
            Err(CliError::UnknownSquare { .. })
        ));
    }

    #[test]
    fn parse_promote() {
        assert!(matches!(
            parse("promote r"),
            Command::Promote(PromotionPiece::Rook)
        ));
        assert!(matches!(
            parse_command("promote king"),
            Err(CliError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn parse_fen_six_and_four_fields() {
        match parse("fen 4k3/8/8/8/8/8/8/4K3 b - - 0 1") {
            Command::Fen { side, .. } => assert_eq!(side, Color::Black),
            other => panic!("expected Fen, got {other:?}"),
        }
        assert!(matches!(parse("fen 4k3/8/8/8/8/8/8/4K3 w - -"), Command::Fen { .. }));
    }

    #[test]
    fn parse_fen_invalid() {
        assert!(matches!(
            parse_command("fen invalid"),
            Err(CliError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("fen"),
            Err(CliError::MissingArgument { command: "fen" })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert!(matches!(
            parse("set autoqueen true"),
            Command::Set(SessionOption::AutoQueen(true))
        ));
        assert!(matches!(
            parse("set board off"),
            Command::Set(SessionOption::Board(false))
        ));
        assert!(matches!(
            parse_command("set board maybe"),
            Err(CliError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse_command("set hash 16"),
            Err(CliError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse_command("set"),
            Err(CliError::MissingArgument { command: "set" })
        ));
    }
}
