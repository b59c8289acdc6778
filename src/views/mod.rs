// ============================================================================
// VIEWS - Binders DOM de cada componente (sin lógica de negocio)
// ============================================================================

pub mod accessibility;
pub mod cookie_banner;
pub mod donation_modal;
pub mod event_modal;
pub mod forms;
pub mod gallery;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod scroll_manager;
pub mod verse_widget;
