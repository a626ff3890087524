#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod health;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod ws;

// Re-exports for public API
pub use config::StoreConfig;
pub use domain::{BoardState, GameKind, GameSession, GameStatus, PlayerId};
pub use error::AppError;
pub use protocol::{InboundAction, OutboundEvent};
pub use services::SessionService;
pub use state::AppState;
pub use store::{MemoryStore, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
