//! Inbound actions and outbound events, tagged by a `type` field.
//!
//! The same action envelope serves both transports: websocket frames
//! carry it as text, the HTTP mirror posts it as a request body.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::{GameKind, GameSession};
use crate::domain::variant::MovePayload;

/// Client-initiated actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InboundAction {
    /// Submit a move for the variant named by `game`.
    #[serde(rename_all = "camelCase")]
    Move {
        player: String,
        game: GameKind,
        position: MovePayload,
    },
    /// Seat a player at the table.
    #[serde(rename_all = "camelCase")]
    JoinGame { player: String },
    /// Switch the variant, keeping seated players.
    #[serde(rename_all = "camelCase")]
    ChangeGame { game: GameKind },
    /// Create a fresh session document, replacing whatever exists.
    #[serde(rename_all = "camelCase")]
    Initialize {
        game: GameKind,
        #[serde(default)]
        max_players: Option<usize>,
    },
    /// Read the current state without mutating it.
    RequestState,
}

/// Server-initiated events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundEvent {
    /// Full session document after an accepted action (or on request).
    #[serde(rename_all = "camelCase")]
    StateUpdate {
        state: GameSession,
        session_id: String,
        /// Milliseconds since the Unix epoch.
        timestamp: i64,
    },
    /// Rejection of the sender's last action. Never broadcast.
    #[serde(rename_all = "camelCase")]
    Error {
        code: String,
        message: String,
        recoverable: bool,
    },
}

impl OutboundEvent {
    pub fn state_update(state: GameSession, session_id: impl Into<String>) -> Self {
        Self::StateUpdate {
            state,
            session_id: session_id.into(),
            timestamp: now_millis(),
        }
    }
}

pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
