use crate::domain::state::{BoardState, GameKind, GameSession, GameStatus};
use crate::domain::transition;
use crate::domain::variant::MovePayload;
use crate::errors::DomainError;

fn active_session() -> GameSession {
    let s = transition::initialize(GameKind::Gomoku, 2);
    let s = transition::join(&s, "ann");
    transition::join(&s, "bob")
}

fn play(session: GameSession, player: &str, x: i64, y: i64) -> GameSession {
    transition::apply_move(
        &session,
        player,
        GameKind::Gomoku,
        &MovePayload::Point([x, y]),
    )
    .expect("hardcoded legal move")
}

#[test]
fn five_in_a_row_wins_four_does_not() {
    let mut s = active_session();
    for i in 0..4 {
        s = play(s, "ann", i, 0);
        assert_eq!(s.status, GameStatus::Active, "four stones do not win");
        if i < 3 {
            s = play(s, "bob", i, 1);
        }
    }
    s = play(s, "bob", 3, 1);
    let s = play(s, "ann", 4, 0);
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
}

#[test]
fn win_detected_when_gap_is_filled_in_the_middle() {
    let mut s = active_session();
    // ann builds 7,7 / 8,8 / 10,10 / 11,11 then completes with 9,9.
    let ann = [(7, 7), (8, 8), (10, 10), (11, 11)];
    let bob = [(0, 0), (1, 0), (2, 0), (3, 0)];
    for i in 0..4 {
        s = play(s, "ann", ann[i].0, ann[i].1);
        s = play(s, "bob", bob[i].0, bob[i].1);
    }
    let s = play(s, "ann", 9, 9);
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
}

#[test]
fn out_of_bounds_point_is_rejected() {
    let s = active_session();
    for point in [[15, 0], [0, 15], [-1, 3], [3, -1]] {
        let err = transition::apply_move(&s, "ann", GameKind::Gomoku, &MovePayload::Point(point))
            .expect_err("outside the board");
        assert!(matches!(err, DomainError::InvalidPosition(_)));
    }
}

#[test]
fn occupied_point_is_rejected() {
    let s = active_session();
    let s = play(s, "ann", 7, 7);
    let err = transition::apply_move(&s, "bob", GameKind::Gomoku, &MovePayload::Point([7, 7]))
        .expect_err("stone already there");
    assert!(matches!(err, DomainError::InvalidPosition(_)));
}

#[test]
fn stones_land_row_major() {
    let s = active_session();
    let s = play(s, "ann", 3, 2);
    let BoardState::Gomoku(board) = &s.board else {
        panic!("gomoku session holds a gomoku board");
    };
    assert_eq!(board.cells[2 * 15 + 3].as_deref(), Some("ann"));
}
