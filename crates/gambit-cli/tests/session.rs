//! Integration tests for the text host.
//!
//! Drives a [`Session`] with scripted input and checks what a player would see.

use gambit_cli::{Session, SessionConfig};
use gambit_core::{Color, GameStatus};

fn run(script: &str) -> (Session, String) {
    let mut session = Session::with_config(SessionConfig {
        board: false,
        autoqueen: false,
    });
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn fools_mate_ends_the_game() {
    let (session, out) = run("move f2f3\nmove e7e5\nmove g2g4\nmove d8h4\n");
    assert!(out.ends_with("played d8h4\nwhite to move: checkmate\n"));
    assert_eq!(session.side_to_move(), Color::White);
    assert_eq!(
        session.position().status(Color::White),
        GameStatus::Checkmate
    );
}

#[test]
fn no_moves_after_checkmate() {
    let (_, out) = run("move f2f3\nmove e7e5\nmove g2g4\nmove d8h4\nmove e1f2\n");
    assert!(out.ends_with("error: illegal move: e1f2\n"));
}

#[test]
fn stalemate_is_reported_on_load() {
    let (_, out) = run("fen K7/8/1qk5/8/8/8/8/8 w - - 0 1\n");
    assert_eq!(out, "white to move: stalemate\n");
}

#[test]
fn castling_through_the_host() {
    let (session, out) = run("fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1\nmove e1g1\nshow\n");
    assert!(out.contains("played e1g1\nblack to move: ongoing\n"));
    assert!(out.contains("fen r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1\n"));
    assert_eq!(session.side_to_move(), Color::Black);
}

#[test]
fn bad_input_does_not_end_the_session() {
    let (session, out) = run("hello\nmove e2\nfen nonsense\nset board maybe\n\nmove e2e4\n");
    let errors = out.lines().filter(|l| l.starts_with("error: ")).count();
    assert_eq!(errors, 4);
    assert!(out.ends_with("played e2e4\nblack to move: ongoing\n"));
    assert_eq!(session.side_to_move(), Color::Black);
}

#[test]
fn new_resets_the_game() {
    let (session, out) = run("move e2e4\nnew\n");
    assert!(out.ends_with("white to move: ongoing\n"));
    assert_eq!(session.side_to_move(), Color::White);
    assert_eq!(session.position().en_passant(), None);
}

#[test]
fn board_is_printed_when_enabled() {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run("move e2e4\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("4  . . . . P . . .\n"));
    assert!(out.ends_with("black to move: ongoing\n"));
}
