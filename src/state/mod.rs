// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + bus de eventos
// ============================================================================

pub mod app_state;
pub mod context;
pub mod event_bus;

pub use app_state::*;
pub use context::*;
pub use event_bus::*;
