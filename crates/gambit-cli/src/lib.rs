//! Text host for gambit: reads commands, tracks the turn, reports game status.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::CliError;
pub use session::{Session, SessionConfig};
