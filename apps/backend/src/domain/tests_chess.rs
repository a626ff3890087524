use crate::domain::chess::board::{piece_at, Color, Grid, Piece, PieceKind, Square};
use crate::domain::chess::{CastlingRights, ChessBoard, ChessMove, Promotion};
use crate::domain::state::{BoardState, GameKind, GameSession, GameStatus};
use crate::domain::transition;
use crate::domain::variant::{MoveContext, MoveOutcome, MovePayload, VariantRules};
use crate::errors::DomainError;

fn active_session() -> GameSession {
    let s = transition::initialize(GameKind::Chess, 2);
    let s = transition::join(&s, "ann");
    transition::join(&s, "bob")
}

fn sq(name: &str) -> Square {
    Square::parse(name).expect("hardcoded valid square")
}

fn mv(from: &str, to: &str) -> MovePayload {
    MovePayload::Chess(ChessMove {
        from: sq(from),
        to: sq(to),
        promotion: None,
    })
}

fn play(session: GameSession, player: &str, from: &str, to: &str) -> GameSession {
    transition::apply_move(&session, player, GameKind::Chess, &mv(from, to))
        .expect("hardcoded legal move")
}

fn grid_of(session: &GameSession) -> &Grid {
    let BoardState::Chess(board) = &session.board else {
        panic!("chess session holds a chess board");
    };
    &board.board
}

/// Sparse position builder for endgame scenarios. `pieces` pairs a
/// square name with a FEN piece code.
fn position(pieces: &[(&str, char)], turn: Color) -> ChessBoard {
    let mut board = ChessBoard::initial();
    board.board = [[None; 8]; 8];
    board.castling = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };
    board.turn = turn;
    for &(name, code) in pieces {
        let square = sq(name);
        board.board[square.row as usize][square.col as usize] =
            Some(Piece::from_code(code).expect("hardcoded piece code"));
    }
    board
}

fn ctx<'a>(mover: &'a str, mover_index: usize, players: &'a [String]) -> MoveContext<'a> {
    MoveContext {
        mover,
        mover_index,
        players,
    }
}

#[test]
fn scholars_mate_finishes_the_game() {
    let mut s = active_session();
    for (player, from, to) in [
        ("ann", "e2", "e4"),
        ("bob", "e7", "e5"),
        ("ann", "d1", "h5"),
        ("bob", "b8", "c6"),
        ("ann", "f1", "c4"),
        ("bob", "g8", "f6"),
    ] {
        s = play(s, player, from, to);
        assert_eq!(s.status, GameStatus::Active);
    }
    let s = play(s, "ann", "h5", "f7");
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.winner.as_deref(), Some("ann"));
}

#[test]
fn illegal_shapes_and_wrong_color_are_rejected() {
    let s = active_session();
    // Three-square pawn push.
    let err = transition::apply_move(&s, "ann", GameKind::Chess, &mv("e2", "e5"))
        .expect_err("pawns move one or two squares");
    assert!(matches!(err, DomainError::InvalidMove(_)));
    // White reaching for a black pawn.
    let err = transition::apply_move(&s, "ann", GameKind::Chess, &mv("e7", "e5"))
        .expect_err("not white's piece");
    assert!(matches!(err, DomainError::InvalidMove(_)));
    // Knight blocked-shape move.
    let err = transition::apply_move(&s, "ann", GameKind::Chess, &mv("g1", "g3"))
        .expect_err("knights do not move straight");
    assert!(matches!(err, DomainError::InvalidMove(_)));
}

#[test]
fn check_must_be_addressed() {
    let s = active_session();
    let s = play(s, "ann", "e2", "e4");
    let s = play(s, "bob", "b8", "c6");
    let s = play(s, "ann", "d1", "h5");
    let s = play(s, "bob", "a7", "a6");
    // Qxf7+ hits e8 along the diagonal.
    let s = play(s, "ann", "h5", "f7");
    let err = transition::apply_move(&s, "bob", GameKind::Chess, &mv("a6", "a5"))
        .expect_err("king is in check");
    assert!(matches!(err, DomainError::InvalidMove(_)));
    // Capturing the queen resolves it.
    let s = play(s, "bob", "e8", "f7");
    assert_eq!(s.status, GameStatus::Active);
}

#[test]
fn kingside_castle_moves_king_and_rook() {
    let s = active_session();
    let s = play(s, "ann", "e2", "e4");
    let s = play(s, "bob", "e7", "e5");
    let s = play(s, "ann", "g1", "f3");
    let s = play(s, "bob", "b8", "c6");
    let s = play(s, "ann", "f1", "c4");
    let s = play(s, "bob", "f8", "c5");
    let s = play(s, "ann", "e1", "g1");
    let grid = grid_of(&s);
    assert_eq!(
        piece_at(grid, sq("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        piece_at(grid, sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(piece_at(grid, sq("e1")), None);
    assert_eq!(piece_at(grid, sq("h1")), None);
    let BoardState::Chess(board) = &s.board else {
        panic!("chess board");
    };
    assert!(!board.castling.white_king_side);
    assert!(!board.castling.white_queen_side);
}

#[test]
fn castling_through_an_attacked_square_is_rejected() {
    // Black rook on f8 covers f1; white may not castle kingside.
    let mut board = position(
        &[("e1", 'K'), ("h1", 'R'), ("e8", 'k'), ("f8", 'r')],
        Color::White,
    );
    board.castling.white_king_side = true;
    let players = vec!["ann".to_owned(), "bob".to_owned()];
    let err = board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("e1"),
                to: sq("g1"),
                promotion: None,
            }),
        )
        .expect_err("f1 is covered");
    assert!(matches!(err, DomainError::InvalidMove(_)));
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let s = active_session();
    let s = play(s, "ann", "e2", "e4");
    let s = play(s, "bob", "a7", "a6");
    let s = play(s, "ann", "e4", "e5");
    let s = play(s, "bob", "d7", "d5");
    let s = play(s, "ann", "e5", "d6");
    let grid = grid_of(&s);
    assert_eq!(
        piece_at(grid, sq("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(piece_at(grid, sq("d5")), None, "captured pawn is gone");
}

#[test]
fn en_passant_expires_after_one_move() {
    let s = active_session();
    let s = play(s, "ann", "e2", "e4");
    let s = play(s, "bob", "a7", "a6");
    let s = play(s, "ann", "e4", "e5");
    let s = play(s, "bob", "d7", "d5");
    let s = play(s, "ann", "b1", "c3");
    let s = play(s, "bob", "a6", "a5");
    let err = transition::apply_move(&s, "ann", GameKind::Chess, &mv("e5", "d6"))
        .expect_err("the en-passant window closed");
    assert!(matches!(err, DomainError::InvalidMove(_)));
}

#[test]
fn promotion_defaults_to_queen_and_honors_the_choice() {
    let players = vec!["ann".to_owned(), "bob".to_owned()];
    let mut board = position(&[("a7", 'P'), ("e1", 'K'), ("e8", 'k')], Color::White);
    board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("a7"),
                to: sq("a8"),
                promotion: None,
            }),
        )
        .expect("promotion push is legal");
    assert_eq!(
        piece_at(&board.board, sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );

    let mut board = position(&[("a7", 'P'), ("e1", 'K'), ("e8", 'k')], Color::White);
    board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("a7"),
                to: sq("a8"),
                promotion: Some(Promotion::Knight),
            }),
        )
        .expect("underpromotion is legal");
    assert_eq!(
        piece_at(&board.board, sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    assert_eq!(board.moves.last().map(String::as_str), Some("a7a8n"));
}

#[test]
fn stalemate_is_a_draw() {
    // Qg1-g6 leaves the cornered black king with no move and no check.
    let players = vec!["ann".to_owned(), "bob".to_owned()];
    let mut board = position(&[("f7", 'K'), ("g1", 'Q'), ("h8", 'k')], Color::White);
    let effect = board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("g1"),
                to: sq("g6"),
                promotion: None,
            }),
        )
        .expect("queen lift is legal");
    assert_eq!(effect.outcome, MoveOutcome::Draw);
}

#[test]
fn bare_kings_are_a_draw() {
    let players = vec!["ann".to_owned(), "bob".to_owned()];
    let mut board = position(&[("e4", 'K'), ("d5", 'n'), ("e8", 'k')], Color::White);
    let effect = board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("e4"),
                to: sq("d5"),
                promotion: None,
            }),
        )
        .expect("undefended knight");
    assert_eq!(effect.outcome, MoveOutcome::Draw);
}

#[test]
fn hundredth_halfmove_draws() {
    let players = vec!["ann".to_owned(), "bob".to_owned()];
    let mut board = position(&[("e1", 'K'), ("a1", 'R'), ("e8", 'k')], Color::White);
    board.halfmove_clock = 99;
    let effect = board
        .apply_move(
            &ctx("ann", 0, &players),
            &MovePayload::Chess(ChessMove {
                from: sq("a1"),
                to: sq("a2"),
                promotion: None,
            }),
        )
        .expect("quiet rook move");
    assert_eq!(effect.outcome, MoveOutcome::Draw);
    assert_eq!(board.halfmove_clock, 100);
}

#[test]
fn threefold_repetition_draws() {
    let mut s = active_session();
    let shuffle = [
        ("ann", "g1", "f3"),
        ("bob", "g8", "f6"),
        ("ann", "f3", "g1"),
        ("bob", "f6", "g8"),
    ];
    for round in 0..2 {
        for (player, from, to) in shuffle {
            s = play(s, player, from, to);
            assert_eq!(s.status, GameStatus::Active, "round {round}");
        }
    }
    // Third occurrence of the position after 1.Nf3.
    let s = play(s, "ann", "g1", "f3");
    assert_eq!(s.status, GameStatus::Draw);
    assert_eq!(s.turn, None);
}
