//! Redis-backed session store.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::domain::state::GameSession;

use super::{decode, encode, session_key, SessionStore, StoreError};

pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Opens the client and waits for a managed connection. The manager
    /// reconnects on its own, so clones stay valid across broker restarts.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)
            .map_err(|err| StoreError::Backend(format!("invalid redis url: {err}")))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|err| StoreError::Backend(format!("redis connect failed: {err}")))?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    async fn get(&self, session_id: &str) -> Result<Option<GameSession>, StoreError> {
        let mut conn = self.manager.clone();
        let raw: Option<String> = conn
            .get(session_key(session_id))
            .await
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        match raw {
            Some(raw) => Ok(Some(decode(&raw)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, session_id: &str, session: &GameSession) -> Result<(), StoreError> {
        let raw = encode(session)?;
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(session_key(session_id), raw)
            .await
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        Ok(())
    }
}
