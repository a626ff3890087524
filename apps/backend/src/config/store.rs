//! Session store selection from the environment.
//!
//! `REDIS_URL` set: documents live in Redis and survive restarts.
//! Unset: an in-process map, good enough for local development.

use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::store::{MemoryStore, RedisStore, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Redis { url: String },
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_redis_url(std::env::var("REDIS_URL").ok())
    }

    fn from_redis_url(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.is_empty() => StoreConfig::Redis { url },
            _ => StoreConfig::Memory,
        }
    }

    pub async fn connect(&self) -> Result<Arc<dyn SessionStore>, AppError> {
        match self {
            StoreConfig::Memory => {
                info!("using in-memory session store");
                Ok(Arc::new(MemoryStore::new()))
            }
            StoreConfig::Redis { url } => {
                info!("connecting to redis session store");
                let store = RedisStore::connect(url).await?;
                Ok(Arc::new(store))
            }
        }
    }
}
