//! In-process store used by tests and local development.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::state::GameSession;

use super::{decode, encode, session_key, SessionStore, StoreError};

/// Keeps the encoded blobs, not the structs, so the memory backend
/// exercises the same serde path as Redis.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, session_id: &str) -> Result<Option<GameSession>, StoreError> {
        match self.entries.get(&session_key(session_id)) {
            Some(raw) => Ok(Some(decode(raw.value())?)),
            None => Ok(None),
        }
    }

    async fn put(&self, session_id: &str, session: &GameSession) -> Result<(), StoreError> {
        let raw = encode(session)?;
        self.entries.insert(session_key(session_id), raw);
        Ok(())
    }
}
