use crate::domain::state::{BoardState, GameKind, GameSession, GameStatus};
use crate::domain::transition;
use crate::domain::variant::MovePayload;
use crate::errors::DomainError;

fn active_session() -> GameSession {
    let s = transition::initialize(GameKind::Connect4, 2);
    let s = transition::join(&s, "ann");
    transition::join(&s, "bob")
}

fn drop_into(session: GameSession, player: &str, col: i64) -> GameSession {
    transition::apply_move(
        &session,
        player,
        GameKind::Connect4,
        &MovePayload::Cell(col),
    )
    .expect("hardcoded legal drop")
}

fn column<'a>(session: &'a GameSession, col: usize) -> &'a [Option<String>] {
    let BoardState::Connect4(board) = &session.board else {
        panic!("connect4 session holds a connect4 board");
    };
    &board.columns[col]
}

#[test]
fn pieces_stack_from_the_bottom() {
    let s = active_session();
    let s = drop_into(s, "ann", 3);
    let s = drop_into(s, "bob", 3);
    let col = column(&s, 3);
    assert_eq!(col[5].as_deref(), Some("ann"));
    assert_eq!(col[4].as_deref(), Some("bob"));
    assert_eq!(col[3], None);
}

#[test]
fn four_in_a_column_wins() {
    let mut s = active_session();
    for _ in 0..3 {
        s = drop_into(s, "ann", 0);
        s = drop_into(s, "bob", 1);
    }
    let s = drop_into(s, "ann", 0);
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
    assert_eq!(s.turn, None);
}

#[test]
fn four_across_the_bottom_row_wins() {
    let mut s = active_session();
    for col in 0..3 {
        s = drop_into(s, "ann", col);
        s = drop_into(s, "bob", 6);
    }
    let s = drop_into(s, "ann", 3);
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
}

#[test]
fn full_column_rejects_further_drops() {
    let mut s = active_session();
    // Alternate into column 0 until its six slots fill; no run of four
    // forms because ownership alternates.
    for _ in 0..3 {
        s = drop_into(s, "ann", 0);
        s = drop_into(s, "bob", 0);
    }
    assert_eq!(s.status, GameStatus::Active);
    let err = transition::apply_move(&s, "ann", GameKind::Connect4, &MovePayload::Cell(0))
        .expect_err("column 0 is full");
    assert!(matches!(err, DomainError::ColumnFull));
}

#[test]
fn column_out_of_range_is_rejected() {
    let s = active_session();
    for col in [-1, 7, 42] {
        let err = transition::apply_move(&s, "ann", GameKind::Connect4, &MovePayload::Cell(col))
            .expect_err("no such column");
        assert!(matches!(err, DomainError::InvalidPosition(_)));
    }
}
