// ============================================================================
// MONTE DE LOS OLIVOS - CAPA INTERACTIVA DEL SITIO (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: binders DOM por componente (sin lógica)
// - ViewModels: lógica de UI pura, testeable en nativo
// - Services: storage, analytics, calendario, compartir, errores globales
// - State: estado compartido con Rc<RefCell> + bus de eventos tipado
// - Models: registros serializables
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global: mantiene vivo el contexto mientras viva la página
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("⛪ Monte de los Olivos - inicializando");

    if let Err(e) = services::error_reporter::install() {
        log::warn!("⚠️ [MAIN] Sin manejadores globales de error: {:?}", e);
    }

    let app = App::new();
    app.init();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Notificación desde JS (p. ej. scripts inline de la página)
#[wasm_bindgen]
pub fn notify(message: &str, kind: &str) {
    let kind = match kind {
        "success" => state::NotificationKind::Success,
        "error" => state::NotificationKind::Error,
        _ => state::NotificationKind::Info,
    };
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.context().bus.notify(message, kind);
        }
    });
}
