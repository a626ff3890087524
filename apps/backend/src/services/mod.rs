//! Service layer bridging transports, pure domain transitions, and the
//! session store.

pub mod sessions;

pub use sessions::SessionService;
