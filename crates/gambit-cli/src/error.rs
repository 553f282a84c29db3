//! Text host errors.

use gambit_core::{FenError, Square};

/// Errors that can occur while parsing or executing a host command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A square name is not in `a1`..`h8`.
    #[error("unknown square: {square}")]
    UnknownSquare {
        /// The text that failed to parse.
        square: String,
    },

    /// A move string is not of the form `<from><to>[q|r|b|n]`.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The move text that failed to parse.
        text: String,
    },

    /// The move is well formed but not legal for the side to move.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The move as entered.
        text: String,
    },

    /// A promotion letter is not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: {text}")]
    InvalidPromotion {
        /// The text that failed to parse.
        text: String,
    },

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        /// The underlying FEN error.
        #[from]
        source: FenError,
    },

    /// A command was given without its required argument.
    #[error("{command} requires an argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A `set` command named an unknown option or gave a bad value.
    #[error("invalid option: {name} {value}")]
    InvalidOption {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The command is not recognized.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The first word of the line.
        command: String,
    },

    /// A pawn is waiting for its promotion piece.
    #[error("promotion pending on {square}: use promote <q|r|b|n>")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        square: Square,
    },

    /// `promote` was sent with no promotion pending.
    #[error("no promotion pending")]
    NoPendingPromotion,

    /// An I/O error occurred while reading commands or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
