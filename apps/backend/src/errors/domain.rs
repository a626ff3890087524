//! Domain-level error type used across the rules core and services.
//!
//! This error type is HTTP- and store-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::GameKind;

/// Typed rejection reasons for game actions.
///
/// Every variant maps to a stable wire code in
/// [`crate::errors::ErrorCode`]; the `Display` strings are the short
/// human-readable messages echoed back to the acting client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The session has already reached `finished` or `draw`.
    GameAlreadyEnded,
    /// A move arrived before enough players joined.
    GameNotStarted,
    /// The acting player never joined this session.
    PlayerNotRegistered,
    /// It is another player's turn.
    NotYourTurn,
    /// Variant-specific illegality (occupied cell, malformed payload,
    /// illegal chess move, ...).
    InvalidMove(String),
    /// Coordinates outside the board, or an occupied intersection.
    InvalidPosition(String),
    /// Connect-four column has no empty slot left.
    ColumnFull,
    /// Dots-and-boxes line was already drawn.
    LineAlreadyExists,
    /// Action targets a different variant than the session is playing.
    UnsupportedGameType(GameKind),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::GameAlreadyEnded => write!(f, "Game has already ended"),
            DomainError::GameNotStarted => write!(f, "Game has not started yet"),
            DomainError::PlayerNotRegistered => {
                write!(f, "Player not registered in this game")
            }
            DomainError::NotYourTurn => write!(f, "Not your turn"),
            DomainError::InvalidMove(detail) => write!(f, "Invalid move: {detail}"),
            DomainError::InvalidPosition(detail) => write!(f, "Invalid position: {detail}"),
            DomainError::ColumnFull => write!(f, "Column full"),
            DomainError::LineAlreadyExists => write!(f, "Line already exists"),
            DomainError::UnsupportedGameType(kind) => {
                write!(f, "Unsupported game type: {kind}")
            }
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::InvalidMove(detail.into())
    }

    pub fn invalid_position(detail: impl Into<String>) -> Self {
        Self::InvalidPosition(detail.into())
    }
}
