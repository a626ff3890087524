//! Session orchestration service - bridges pure domain transitions with
//! the session store.
//!
//! Every mutation follows the same path: serialize writers per session,
//! load (or default) the document, run the pure transition, persist the
//! replacement, hand the fresh document back for broadcast. A failed
//! transition never writes, so readers only ever observe documents a
//! transition produced.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::state::GameSession;
use crate::domain::transition;
use crate::error::AppError;
use crate::protocol::InboundAction;
use crate::store::SessionStore;

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    /// Per-session write locks. An entry lives for the registry's
    /// lifetime; the map only grows by one small Arc per touched session.
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, session_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(session_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn load_or_default(&self, session_id: &str) -> Result<GameSession, AppError> {
        match self.store.get(session_id).await? {
            Some(session) => Ok(session),
            None => Ok(transition::default_session()),
        }
    }

    /// Current document for a session; a never-touched id resolves to the
    /// default waiting tictactoe table without writing anything.
    pub async fn state(&self, session_id: &str) -> Result<GameSession, AppError> {
        self.load_or_default(session_id).await
    }

    /// Applies one action and returns the resulting document.
    pub async fn handle(
        &self,
        session_id: &str,
        action: InboundAction,
    ) -> Result<GameSession, AppError> {
        if let InboundAction::RequestState = action {
            return self.state(session_id).await;
        }

        let lock = self.lock_for(session_id);
        let _guard = lock.lock().await;

        let current = self.load_or_default(session_id).await?;
        let next = match action {
            InboundAction::Move {
                ref player,
                game,
                ref position,
            } => {
                let result = transition::apply_move(&current, player, game, position);
                match &result {
                    Ok(next) => {
                        info!(
                            session_id,
                            player = %player,
                            game = %game,
                            status = ?next.status,
                            "move accepted"
                        );
                    }
                    Err(err) => {
                        debug!(session_id, player = %player, game = %game, %err, "move rejected");
                    }
                }
                result?
            }
            InboundAction::JoinGame { ref player } => {
                let next = transition::join(&current, player);
                info!(
                    session_id,
                    player = %player,
                    seated = next.players.len(),
                    status = ?next.status,
                    "join handled"
                );
                next
            }
            InboundAction::ChangeGame { game } => {
                info!(session_id, game = %game, "switching variant");
                transition::change_game(&current, game)
            }
            InboundAction::Initialize { game, max_players } => {
                let max_players = max_players.unwrap_or(transition::DEFAULT_MAX_PLAYERS);
                info!(session_id, game = %game, max_players, "initializing session");
                transition::initialize(game, max_players)
            }
            InboundAction::RequestState => unreachable!("handled above"),
        };

        if let Err(err) = self.store.put(session_id, &next).await {
            warn!(session_id, %err, "failed to persist session");
            return Err(err.into());
        }
        Ok(next)
    }
}
