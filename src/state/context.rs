// ============================================================================
// APP CONTEXT - Contexto explícito que reciben todos los inicializadores
// ============================================================================

use std::rc::Rc;
use crate::services::storage_service::KeyValueStore;
use crate::state::{AppState, EventBus};

#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub bus: EventBus,
    pub store: Rc<dyn KeyValueStore>,
}

impl AppContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            state: AppState::new(),
            bus: EventBus::new(),
            store,
        }
    }
}
