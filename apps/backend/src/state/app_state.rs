use std::sync::Arc;

use crate::services::SessionService;
use crate::store::SessionStore;
use crate::ws::hub::SessionRegistry;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    service: Arc<SessionService>,
    registry: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            service: Arc::new(SessionService::new(store)),
            registry: Arc::new(SessionRegistry::new()),
        }
    }

    pub fn service(&self) -> Arc<SessionService> {
        self.service.clone()
    }

    pub fn registry(&self) -> Arc<SessionRegistry> {
        self.registry.clone()
    }
}
