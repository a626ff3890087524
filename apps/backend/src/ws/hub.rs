//! Connection registry: session id -> live websocket recipients.

use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::protocol::OutboundEvent;

/// Event pushed to a connection actor for delivery to its client.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct OutboundMessage(pub OutboundEvent);

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, DashMap<Uuid, Recipient<OutboundMessage>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, session_id: &str, recipient: Recipient<OutboundMessage>) -> Uuid {
        let token = Uuid::new_v4();
        let entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(DashMap::new);
        entry.insert(token, recipient);
        token
    }

    pub fn unregister(&self, session_id: &str, token: Uuid) {
        if let Some(entry) = self.sessions.get(session_id) {
            entry.remove(&token);
            if entry.is_empty() {
                drop(entry);
                self.sessions.remove_if(session_id, |_, conns| conns.is_empty());
            }
        }
    }

    /// Delivers an event to every connection watching a session,
    /// including the one that triggered it.
    pub fn broadcast(&self, session_id: &str, event: OutboundEvent) {
        if let Some(entry) = self.sessions.get(session_id) {
            for recipient in entry.iter() {
                recipient.value().do_send(OutboundMessage(event.clone()));
            }
        }
    }

    pub fn connection_count(&self, session_id: &str) -> usize {
        self.sessions
            .get(session_id)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }
}
