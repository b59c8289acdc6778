// ============================================================================
// VIEWMODELS - Lógica pura de la UI (sin DOM, testeable en nativo)
// ============================================================================

pub mod cookie_consent;
pub mod donation;
pub mod feedback;
pub mod focus_trap;
pub mod form_validation;
pub mod modal;
pub mod scroll;
pub mod scroll_spy;
pub mod shortcuts;
pub mod verse;

pub use modal::{ModalLifecycle, ModalPhase};
