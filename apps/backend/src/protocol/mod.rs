//! Wire types shared by the websocket and HTTP surfaces.

pub mod messages;

pub use messages::{InboundAction, OutboundEvent};
