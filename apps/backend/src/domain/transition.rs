//! Pure session transitions: initialize, join, change game, apply move.
//!
//! Every function takes the current session by reference and returns a
//! fresh session; callers persist the result only when the transition
//! succeeds, so a failed move never leaves a half-mutated document.

use crate::domain::state::{next_in_rotation, BoardState, GameKind, GameSession, GameStatus};
use crate::domain::variant::{MoveContext, MoveOutcome, MovePayload};
use crate::errors::DomainError;

pub const DEFAULT_MAX_PLAYERS: usize = 2;

pub fn initialize(kind: GameKind, max_players: usize) -> GameSession {
    GameSession::new(kind, max_players)
}

/// The session a fresh id resolves to before anyone has touched it.
pub fn default_session() -> GameSession {
    GameSession::new(GameKind::Tictactoe, DEFAULT_MAX_PLAYERS)
}

/// Adds a player. Joining is idempotent for existing members, and a
/// no-op once the session is full or finished. The first joiner takes
/// the turn; reaching capacity activates the session.
pub fn join(session: &GameSession, player: &str) -> GameSession {
    let mut next = session.clone();
    if next.status.is_terminal() || next.is_member(player) || next.is_full() {
        return next;
    }
    next.players.push(player.to_owned());
    if next.turn.is_none() {
        next.turn = Some(player.to_owned());
    }
    if next.is_full() {
        next.status = GameStatus::Active;
    }
    next
}

/// Switches the session to a different game. Players stay seated; the
/// board, winner, and turn reset as if the match just started.
pub fn change_game(session: &GameSession, kind: GameKind) -> GameSession {
    let mut next = session.clone();
    next.board = BoardState::empty(kind);
    next.winner = None;
    next.turn = next.players.first().cloned();
    next.status = if next.is_full() {
        GameStatus::Active
    } else {
        GameStatus::Waiting
    };
    next
}

/// Validates and applies one move. Precondition order is fixed: a
/// finished session rejects everything, then membership, then player
/// count, then turn, then the game tag, and only then the variant rules.
pub fn apply_move(
    session: &GameSession,
    player: &str,
    game: GameKind,
    payload: &MovePayload,
) -> Result<GameSession, DomainError> {
    if session.status.is_terminal() {
        return Err(DomainError::GameAlreadyEnded);
    }
    let Some(mover_index) = session.players.iter().position(|p| p == player) else {
        return Err(DomainError::PlayerNotRegistered);
    };
    if session.players.len() < 2 {
        return Err(DomainError::GameNotStarted);
    }
    if session.turn.as_deref() != Some(player) {
        return Err(DomainError::NotYourTurn);
    }
    if game != session.kind() {
        return Err(DomainError::UnsupportedGameType(game));
    }

    let mut next = session.clone();
    let effect = {
        let ctx = MoveContext {
            mover: player,
            mover_index,
            players: &session.players,
        };
        next.board.apply_move(&ctx, payload)?
    };

    match effect.outcome {
        MoveOutcome::Won(winner) => {
            next.status = GameStatus::Finished;
            next.winner = Some(winner);
            next.turn = None;
        }
        MoveOutcome::Draw => {
            next.status = GameStatus::Draw;
            next.winner = None;
            next.turn = None;
        }
        MoveOutcome::Ongoing => {
            next.status = GameStatus::Active;
            if !effect.extra_turn {
                next.turn = next_in_rotation(&next.players, player).cloned();
            }
        }
    }
    Ok(next)
}
