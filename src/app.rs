// ============================================================================
// APP - Composición de todos los componentes de la página
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Event;
use crate::config::CONFIG;
use crate::dom::{add_class, get_element_by_id, on_event, set_attribute, window};
use crate::services::storage_service::browser_store;
use crate::state::{AppContext, AppState};
use crate::viewmodels::feedback::load_testimonials;
use crate::views::{
    accessibility, cookie_banner, donation_modal, event_modal, forms, gallery, navigation,
    notification, scroll_manager, verse_widget,
};

/// Aplicación principal: dueña del contexto compartido
pub struct App {
    ctx: AppContext,
}

/// Un componente que falla se registra y el resto sigue arrancando
fn init_component(name: &str, result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => {
            log::debug!("[APP] {} listo", name);
            true
        }
        Err(e) => {
            log::error!("❌ [APP] Error inicializando {}: {:?}", name, e);
            false
        }
    }
}

fn hide_loading_screen(state: &AppState) {
    state.set_loading(false);
    if let Some(screen) = get_element_by_id("loading-screen") {
        let _ = add_class(&screen, "hidden");
        let _ = set_attribute(&screen, "aria-hidden", "true");
    }
    log::debug!("[APP] Pantalla de carga oculta");
}

impl App {
    pub fn new() -> Self {
        let ctx = AppContext::new(browser_store());
        load_testimonials(&ctx);
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Arranca todos los componentes; devuelve cuántos fallaron
    pub fn init(&self) -> usize {
        let ctx = &self.ctx;
        let results = [
            init_component("notificaciones", notification::init(ctx)),
            init_component("accesibilidad", accessibility::init(ctx)),
            init_component("navegación", navigation::init(ctx)),
            init_component("scroll", scroll_manager::init()),
            init_component("galería", gallery::init(ctx)),
            init_component("eventos", event_modal::init(ctx)),
            init_component("donaciones", donation_modal::init(ctx)),
            init_component("formularios", forms::init(ctx)),
            init_component("versículo", verse_widget::init(ctx)),
            init_component("cookies", cookie_banner::init(ctx)),
            init_component("carga", self.bind_loading_screen()),
        ];
        let failed = results.iter().filter(|ok| !**ok).count();
        if failed == 0 {
            log::info!("✅ [APP] Todos los componentes inicializados");
        } else {
            log::warn!("⚠️ [APP] {} componentes fallaron al iniciar", failed);
        }
        failed
    }

    /// `#loading-screen` se oculta tras el evento `load` de la ventana
    fn bind_loading_screen(&self) -> Result<(), JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
        let state = self.ctx.state.clone();

        let already_loaded = win
            .document()
            .map(|d| d.ready_state() == "complete")
            .unwrap_or(false);
        if already_loaded {
            Timeout::new(CONFIG.timing.loading_hide_delay_ms, move || hide_loading_screen(&state)).forget();
            return Ok(());
        }

        on_event(&win, "load", move |_e: Event| {
            let state = state.clone();
            Timeout::new(CONFIG.timing.loading_hide_delay_ms, move || hide_loading_screen(&state)).forget();
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
