use crate::domain::state::{GameKind, GameSession, GameStatus};
use crate::domain::transition;
use crate::domain::variant::MovePayload;
use crate::errors::DomainError;

fn active_session() -> GameSession {
    let s = transition::initialize(GameKind::Tictactoe, 2);
    let s = transition::join(&s, "ann");
    transition::join(&s, "bob")
}

fn play(session: GameSession, player: &str, cell: i64) -> GameSession {
    transition::apply_move(
        &session,
        player,
        GameKind::Tictactoe,
        &MovePayload::Cell(cell),
    )
    .expect("hardcoded legal move")
}

#[test]
fn top_row_wins() {
    let mut s = active_session();
    for (player, cell) in [("ann", 0), ("bob", 3), ("ann", 1), ("bob", 4)] {
        s = play(s, player, cell);
        assert_eq!(s.status, GameStatus::Active);
    }
    let s = play(s, "ann", 2);
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
    assert_eq!(s.turn, None);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut s = active_session();
    let moves = [
        ("ann", 0),
        ("bob", 4),
        ("ann", 8),
        ("bob", 2),
        ("ann", 6),
        ("bob", 3),
        ("ann", 5),
        ("bob", 7),
        ("ann", 1),
    ];
    for (player, cell) in moves {
        s = play(s, player, cell);
    }
    assert_eq!(s.status, GameStatus::Draw);
    assert_eq!(s.winner, None);
    assert_eq!(s.turn, None);
}

#[test]
fn occupied_cell_is_rejected_without_state_change() {
    let s = active_session();
    let s = play(s, "ann", 0);
    let err = transition::apply_move(&s, "bob", GameKind::Tictactoe, &MovePayload::Cell(0))
        .expect_err("cell 0 is taken");
    assert!(matches!(err, DomainError::InvalidMove(_)));
    // Rejection left the session untouched: bob still to move.
    assert_eq!(s.turn.as_deref(), Some("bob"));
}

#[test]
fn cell_out_of_range_is_rejected() {
    let s = active_session();
    for cell in [-1, 9, 100] {
        let err = transition::apply_move(&s, "ann", GameKind::Tictactoe, &MovePayload::Cell(cell))
            .expect_err("out of range");
        assert!(matches!(err, DomainError::InvalidMove(_)));
    }
}

#[test]
fn wrong_payload_shape_is_rejected() {
    let s = active_session();
    let err = transition::apply_move(
        &s,
        "ann",
        GameKind::Tictactoe,
        &MovePayload::Point([0, 0]),
    )
    .expect_err("tictactoe takes a cell index");
    assert!(matches!(err, DomainError::InvalidMove(_)));
}
