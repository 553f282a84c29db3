//! Line-oriented game session over any reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Color, Position, PromotionPiece, Square};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Promote to a queen when a move reaches the last row without a piece choice.
    pub autoqueen: bool,
    /// Print the board after each committed move.
    pub board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoqueen: false,
            board: true,
        }
    }
}

/// A game in progress: the position, whose turn it is, and any promotion
/// still waiting for its piece.
///
/// The rules engine does not track the side to move; the session does,
/// flipping it after every committed move.
pub struct Session {
    position: Position,
    side_to_move: Color,
    pending_promotion: Option<Square>,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session at the starting position with the given options.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            position: Position::starting_position(),
            side_to_move: Color::White,
            pending_promotion: None,
            config,
        }
    }

    /// Return the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Return the side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the square of a pawn still waiting for its promotion piece.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Return the current options.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Rejected commands are reported on `out` as `error: ...` lines and the
    /// session carries on. Only I/O failures end the loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| match cmd {
                Some(Command::Quit) => Ok(false),
                Some(cmd) => self.execute(cmd, out).map(|()| true),
                None => Ok(true),
            });

            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Execute one parsed command, writing its response to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        if let Some(square) = self.pending_promotion {
            let allowed = matches!(
                cmd,
                Command::Promote(_) | Command::Show | Command::Status | Command::Quit
            );
            if !allowed {
                return Err(CliError::PromotionPending { square });
            }
        }

        match cmd {
            Command::New => self.handle_load(Position::starting_position(), Color::White, out),
            Command::Fen { position, side } => self.handle_load(position, side, out),
            Command::Show => self.handle_show(out),
            Command::Moves(from) => self.handle_moves(from, out),
            Command::Move {
                from,
                to,
                promotion,
            } => self.handle_move(from, to, promotion, out),
            Command::Promote(choice) => self.handle_promote(choice, out),
            Command::Status => self.handle_status(out),
            Command::Set(option) => self.handle_set(option, out),
            Command::Quit => Ok(()),
        }
    }

    fn handle_load<W: Write>(
        &mut self,
        position: Position,
        side: Color,
        out: &mut W,
    ) -> Result<(), CliError> {
        self.position = position;
        self.side_to_move = side;
        self.pending_promotion = None;
        if self.config.board {
            writeln!(out, "{}", self.position.board().pretty())?;
        }
        self.handle_status(out)
    }

    fn handle_show<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", self.position.board().pretty())?;
        writeln!(out, "{} to move", self.side_to_move.name())?;
        // An unpromoted pawn on its last row is not a loadable FEN.
        match self.pending_promotion {
            Some(square) => writeln!(out, "promotion pending on {square}")?,
            None => writeln!(out, "fen {}", self.position.to_fen(self.side_to_move))?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, from: Square, out: &mut W) -> Result<(), CliError> {
        let dests: Vec<String> = self
            .position
            .legal_destinations(from, self.side_to_move)
            .iter()
            .map(Square::to_string)
            .collect();
        if dests.is_empty() {
            writeln!(out, "{from}: none")?;
        } else {
            writeln!(out, "{from}: {}", dests.join(" "))?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
        out: &mut W,
    ) -> Result<(), CliError> {
        let illegal = || CliError::IllegalMove {
            text: match promotion {
                Some(p) => format!("{from}{to}{}", p.to_char()),
                None => format!("{from}{to}"),
            },
        };

        let mv = self
            .position
            .find_move(from, to, self.side_to_move)
            .ok_or_else(illegal)?;
        if promotion.is_some() && !mv.is_promotion() {
            return Err(illegal());
        }

        let promotion = match promotion {
            None if mv.is_promotion() && self.config.autoqueen => Some(PromotionPiece::Queen),
            other => other,
        };

        let outcome = self.position.apply_move(mv, promotion);
        self.position = outcome.position;

        match promotion {
            Some(p) => writeln!(out, "played {mv}{}", p.to_char())?,
            None => writeln!(out, "played {mv}")?,
        }
        if let Some(piece) = outcome.captured {
            writeln!(out, "captured {} {}", piece.color().name(), piece.kind())?;
        }

        if let Some(square) = outcome.pending_promotion {
            self.pending_promotion = Some(square);
            writeln!(out, "promote on {square}: choose q, r, b or n")?;
            return Ok(());
        }

        self.finish_turn(out)
    }

    fn handle_promote<W: Write>(
        &mut self,
        choice: PromotionPiece,
        out: &mut W,
    ) -> Result<(), CliError> {
        let square = self
            .pending_promotion
            .take()
            .ok_or(CliError::NoPendingPromotion)?;
        self.position = self.position.promote(square, choice);
        writeln!(out, "promoted on {square} to {choice}")?;
        self.finish_turn(out)
    }

    fn handle_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let status = self.position.status(self.side_to_move);
        writeln!(out, "{} to move: {status}", self.side_to_move.name())?;
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), CliError> {
        match option {
            SessionOption::AutoQueen(on) => self.config.autoqueen = on,
            SessionOption::Board(on) => self.config.board = on,
        }
        debug!(?option, "option changed");
        writeln!(out, "ok")?;
        Ok(())
    }

    /// Hand the turn to the other side and report its status.
    fn finish_turn<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        self.side_to_move = self.side_to_move.flip();
        if self.config.board {
            writeln!(out, "{}", self.position.board().pretty())?;
        }

        let status = self.position.status(self.side_to_move);
        writeln!(out, "{} to move: {status}", self.side_to_move.name())?;
        if status.is_game_over() {
            info!(%status, loser = self.side_to_move.name(), "game over");
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
