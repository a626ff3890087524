//! Session persistence: a key-value gateway storing one JSON document
//! per session under `gameState:{session_id}`.

pub mod memory;
pub mod redis;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::state::GameSession;

pub use memory::MemoryStore;
pub use redis::RedisStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Storage key for a session document.
pub fn session_key(session_id: &str) -> String {
    format!("gameState:{session_id}")
}

/// Blob-oriented session storage. Implementations only see opaque JSON
/// strings; encoding stays on this side of the trait so every backend
/// persists the identical document.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str) -> Result<Option<GameSession>, StoreError>;
    async fn put(&self, session_id: &str, session: &GameSession) -> Result<(), StoreError>;
}

pub(crate) fn encode(session: &GameSession) -> Result<String, StoreError> {
    Ok(serde_json::to_string(session)?)
}

pub(crate) fn decode(raw: &str) -> Result<GameSession, StoreError> {
    Ok(serde_json::from_str(raw)?)
}
