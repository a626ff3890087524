//! Realtime transport: one actor per websocket connection, a registry
//! fanning accepted state updates out to every connection on a session.

pub mod hub;
pub mod session;

pub use hub::{OutboundMessage, SessionRegistry};
pub use session::upgrade;
