use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::chess::ChessBoard;
use crate::domain::connect4::Connect4Board;
use crate::domain::dots::DotsBoard;
use crate::domain::gomoku::GomokuBoard;
use crate::domain::tictactoe::TicTacToeBoard;

/// Opaque player identity handed in by the transport layer.
pub type PlayerId = String;

/// The five supported game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Tictactoe,
    Gomoku,
    Dots,
    Connect4,
    Chess,
}

impl GameKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameKind::Tictactoe => "tictactoe",
            GameKind::Gomoku => "gomoku",
            GameKind::Dots => "dots",
            GameKind::Connect4 => "connect4",
            GameKind::Chess => "chess",
        }
    }
}

impl Display for GameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Session lifecycle: `waiting -> active -> {finished | draw}`.
///
/// Terminal states are only left through an explicit `changeGame` reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Active,
    Finished,
    Draw,
}

impl GameStatus {
    /// True once no further moves are accepted.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Finished | GameStatus::Draw)
    }
}

/// Board payload for the active variant, tagged by `currentGame`.
///
/// Exactly one variant's payload exists per document; switching games via
/// `changeGame` replaces it with a fresh empty board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "currentGame", content = "board")]
pub enum BoardState {
    #[serde(rename = "tictactoe")]
    TicTacToe(TicTacToeBoard),
    #[serde(rename = "gomoku")]
    Gomoku(GomokuBoard),
    #[serde(rename = "dots")]
    Dots(DotsBoard),
    #[serde(rename = "connect4")]
    Connect4(Connect4Board),
    #[serde(rename = "chess")]
    Chess(ChessBoard),
}

impl BoardState {
    /// Fresh empty board for a variant.
    pub fn empty(kind: GameKind) -> Self {
        match kind {
            GameKind::Tictactoe => BoardState::TicTacToe(TicTacToeBoard::empty()),
            GameKind::Gomoku => BoardState::Gomoku(GomokuBoard::empty()),
            GameKind::Dots => BoardState::Dots(DotsBoard::empty()),
            GameKind::Connect4 => BoardState::Connect4(Connect4Board::empty()),
            GameKind::Chess => BoardState::Chess(ChessBoard::initial()),
        }
    }

    pub const fn kind(&self) -> GameKind {
        match self {
            BoardState::TicTacToe(_) => GameKind::Tictactoe,
            BoardState::Gomoku(_) => GameKind::Gomoku,
            BoardState::Dots(_) => GameKind::Dots,
            BoardState::Connect4(_) => GameKind::Connect4,
            BoardState::Chess(_) => GameKind::Chess,
        }
    }
}

/// The single persisted document per session.
///
/// Every accepted operation replaces the stored value wholesale, so the
/// Persistence Gateway only ever sees fully consistent documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Join order doubles as turn order; first joiner plays X / white / red.
    pub players: Vec<PlayerId>,
    pub max_players: usize,
    /// Player allowed to move next; `None` before play begins and after a
    /// terminal state is reached.
    pub turn: Option<PlayerId>,
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
    #[serde(flatten)]
    pub board: BoardState,
}

impl GameSession {
    pub fn new(kind: GameKind, max_players: usize) -> Self {
        Self {
            players: Vec::new(),
            max_players,
            turn: None,
            status: GameStatus::Waiting,
            winner: None,
            board: BoardState::empty(kind),
        }
    }

    pub fn kind(&self) -> GameKind {
        self.board.kind()
    }

    pub fn is_member(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }
}

/// Turn rotation over join order.
///
/// Index-based modulo so the same rule serves two players and any larger
/// table a variant may allow. Returns `None` when the mover is unknown or
/// nobody has joined.
pub fn next_in_rotation<'a>(players: &'a [PlayerId], current: &str) -> Option<&'a PlayerId> {
    let index = players.iter().position(|p| p == current)?;
    players.get((index + 1) % players.len())
}
