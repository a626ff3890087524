//! Error codes for the game engine API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in transport responses.

use core::fmt;

/// Centralized error codes for the engine's transport surface.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string and carries
/// a `recoverable` classification: `true` for expected rejections the client
/// can retry after correcting its input, `false` for terminal/unexpected
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rejections
    /// Session already reached a terminal state
    GameAlreadyEnded,
    /// Not enough players joined yet
    GameNotStarted,
    /// Acting player never joined the session
    PlayerNotRegistered,
    /// Another player holds the turn
    NotYourTurn,
    /// Variant-specific illegal move
    InvalidMove,
    /// Coordinates outside the board or cell occupied
    InvalidPosition,
    /// Connect-four column full
    ColumnFull,
    /// Dots-and-boxes line already drawn
    LineAlreadyExists,
    /// Action targets a variant the session is not playing
    UnsupportedGameType,

    // Request validation
    /// Malformed action payload
    BadRequest,

    // Infrastructure
    /// Write to the session store failed after a validated mutation
    PersistenceFailure,
    /// Unexpected internal failure
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GameAlreadyEnded => "GAME_ALREADY_ENDED",
            ErrorCode::GameNotStarted => "GAME_NOT_STARTED",
            ErrorCode::PlayerNotRegistered => "PLAYER_NOT_REGISTERED",
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::InvalidMove => "INVALID_MOVE",
            ErrorCode::InvalidPosition => "INVALID_POSITION",
            ErrorCode::ColumnFull => "COLUMN_FULL",
            ErrorCode::LineAlreadyExists => "LINE_ALREADY_EXISTS",
            ErrorCode::UnsupportedGameType => "UNSUPPORTED_GAME_TYPE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PersistenceFailure => "PERSISTENCE_FAILURE",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Whether the acting client can expect to recover by correcting its
    /// input and retrying. Persistence and internal failures are terminal
    /// for the request: the mutation may not have been durably committed.
    pub const fn recoverable(&self) -> bool {
        !matches!(self, ErrorCode::PersistenceFailure | ErrorCode::Internal)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
