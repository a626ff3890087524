use crate::domain::state::{GameKind, GameSession, GameStatus};
use crate::domain::transition;
use crate::domain::variant::MovePayload;
use crate::errors::DomainError;

fn active_session() -> GameSession {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    transition::join(&s, "bob")
}

fn finished_session() -> GameSession {
    let mut s = active_session();
    for (player, cell) in [("ann", 0), ("bob", 3), ("ann", 1), ("bob", 4), ("ann", 2)] {
        s = transition::apply_move(&s, player, GameKind::Tictactoe, &MovePayload::Cell(cell))
            .expect("hardcoded winning line");
    }
    s
}

#[test]
fn initialize_starts_waiting_and_empty() {
    let s = transition::initialize(GameKind::Gomoku, 2);
    assert_eq!(s.status, GameStatus::Waiting);
    assert!(s.players.is_empty());
    assert_eq!(s.turn, None);
    assert_eq!(s.winner, None);
    assert_eq!(s.kind(), GameKind::Gomoku);
}

#[test]
fn default_session_is_two_player_tictactoe() {
    let s = transition::default_session();
    assert_eq!(s.kind(), GameKind::Tictactoe);
    assert_eq!(s.max_players, 2);
    assert_eq!(s.status, GameStatus::Waiting);
}

#[test]
fn first_joiner_takes_the_turn_and_capacity_activates() {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    assert_eq!(s.turn.as_deref(), Some("ann"));
    assert_eq!(s.status, GameStatus::Waiting);
    let s = transition::join(&s, "bob");
    assert_eq!(s.status, GameStatus::Active);
    assert_eq!(s.players, vec!["ann".to_owned(), "bob".to_owned()]);
}

#[test]
fn join_is_idempotent_and_capped() {
    let s = active_session();
    let again = transition::join(&s, "ann");
    assert_eq!(again, s);
    let third = transition::join(&s, "cal");
    assert_eq!(third.players.len(), 2, "full session ignores joiners");
}

#[test]
fn moves_need_two_seated_players() {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    let err = transition::apply_move(&s, "ann", GameKind::Tictactoe, &MovePayload::Cell(0))
        .expect_err("nobody to play against");
    assert!(matches!(err, DomainError::GameNotStarted));
}

#[test]
fn strangers_are_rejected_before_anything_else() {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    let err = transition::apply_move(&s, "zed", GameKind::Tictactoe, &MovePayload::Cell(0))
        .expect_err("not seated");
    assert!(matches!(err, DomainError::PlayerNotRegistered));
}

#[test]
fn turn_order_is_enforced_and_rotates() {
    let s = active_session();
    let err = transition::apply_move(&s, "bob", GameKind::Tictactoe, &MovePayload::Cell(0))
        .expect_err("ann moves first");
    assert!(matches!(err, DomainError::NotYourTurn));
    let s = transition::apply_move(&s, "ann", GameKind::Tictactoe, &MovePayload::Cell(0))
        .expect("ann's turn");
    assert_eq!(s.turn.as_deref(), Some("bob"));
}

#[test]
fn game_tag_must_match_the_active_variant() {
    let s = active_session();
    let err = transition::apply_move(&s, "ann", GameKind::Gomoku, &MovePayload::Point([0, 0]))
        .expect_err("session is playing tictactoe");
    assert!(matches!(
        err,
        DomainError::UnsupportedGameType(GameKind::Gomoku)
    ));
}

#[test]
fn finished_sessions_reject_all_moves() {
    let s = finished_session();
    assert_eq!(s.status, GameStatus::Finished);
    let err = transition::apply_move(&s, "bob", GameKind::Tictactoe, &MovePayload::Cell(5))
        .expect_err("game over");
    assert!(matches!(err, DomainError::GameAlreadyEnded));
}

#[test]
fn change_game_keeps_players_and_resets_the_match() {
    let s = finished_session();
    let s = transition::change_game(&s, GameKind::Connect4);
    assert_eq!(s.kind(), GameKind::Connect4);
    assert_eq!(s.players, vec!["ann".to_owned(), "bob".to_owned()]);
    assert_eq!(s.winner, None);
    assert_eq!(s.turn.as_deref(), Some("ann"));
    assert_eq!(s.status, GameStatus::Active, "both seats still taken");
    // Play resumes immediately on the fresh board.
    let s = transition::apply_move(&s, "ann", GameKind::Connect4, &MovePayload::Cell(3))
        .expect("fresh board accepts moves");
    assert_eq!(s.turn.as_deref(), Some("bob"));
}

#[test]
fn change_game_on_a_partial_table_stays_waiting() {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    let s = transition::change_game(&s, GameKind::Chess);
    assert_eq!(s.status, GameStatus::Waiting);
    assert_eq!(s.turn.as_deref(), Some("ann"));
}
