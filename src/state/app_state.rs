// ============================================================================
// APP STATE - Estado de la página (vive lo que vive la página)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::testimonial::Testimonial;

pub const DEFAULT_GALLERY_TAB: &str = "todas";

/// Estado global de la aplicación; clonar comparte el mismo estado
#[derive(Clone)]
pub struct AppState {
    pub current_gallery_tab: Rc<RefCell<String>>,
    pub is_menu_open: Rc<RefCell<bool>>,
    pub is_loading: Rc<RefCell<bool>>,
    pub testimonios: Rc<RefCell<Vec<Testimonial>>>,
    pub comentarios: Rc<RefCell<Vec<Testimonial>>>,
    /// Elemento con foco antes de abrir un modal (se restaura al cerrar)
    pub last_focused_element: Rc<RefCell<Option<web_sys::HtmlElement>>>,
    /// Modal abierto en este momento, si hay alguno
    pub open_modal: Rc<RefCell<Option<String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_gallery_tab: Rc::new(RefCell::new(DEFAULT_GALLERY_TAB.to_string())),
            is_menu_open: Rc::new(RefCell::new(false)),
            is_loading: Rc::new(RefCell::new(true)),
            testimonios: Rc::new(RefCell::new(Vec::new())),
            comentarios: Rc::new(RefCell::new(Vec::new())),
            last_focused_element: Rc::new(RefCell::new(None)),
            open_modal: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_gallery_tab(&self, tab: &str) {
        *self.current_gallery_tab.borrow_mut() = tab.to_string();
    }

    pub fn gallery_tab(&self) -> String {
        self.current_gallery_tab.borrow().clone()
    }

    pub fn set_menu_open(&self, open: bool) {
        *self.is_menu_open.borrow_mut() = open;
    }

    pub fn menu_open(&self) -> bool {
        *self.is_menu_open.borrow()
    }

    /// Invierte el estado del menú y devuelve el nuevo valor
    pub fn toggle_menu(&self) -> bool {
        let mut open = self.is_menu_open.borrow_mut();
        *open = !*open;
        *open
    }

    pub fn set_loading(&self, loading: bool) {
        *self.is_loading.borrow_mut() = loading;
    }

    pub fn loading(&self) -> bool {
        *self.is_loading.borrow()
    }

    pub fn set_open_modal(&self, modal_id: Option<String>) {
        *self.open_modal.borrow_mut() = modal_id;
    }

    pub fn open_modal(&self) -> Option<String> {
        self.open_modal.borrow().clone()
    }

    pub fn testimonial_count(&self) -> usize {
        self.testimonios.borrow().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_with_closed_menu() {
        let state = AppState::new();
        assert!(state.loading());
        assert!(!state.menu_open());
        assert_eq!(state.gallery_tab(), DEFAULT_GALLERY_TAB);
        assert!(state.open_modal().is_none());
    }

    #[test]
    fn toggle_menu_flips_shared_flag() {
        let state = AppState::new();
        let handle = state.clone();
        assert!(state.toggle_menu());
        assert!(handle.menu_open());
        assert!(!handle.toggle_menu());
        assert!(!state.menu_open());
    }
}
