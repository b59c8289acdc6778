// ============================================================================
// ERROR REPORTER - Errores globales de la página (error / unhandledrejection)
// ============================================================================
// Solo registra y reenvía a analytics; nunca detiene la página.
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use web_sys::{window, ErrorEvent, PromiseRejectionEvent};
use crate::dom::on_event;
use crate::services::analytics;

thread_local! {
    // Los listeners globales se registran una sola vez
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Texto con origen "fichero:línea:columna" cuando se conoce
pub fn describe_error(message: &str, source: &str, line: u32, column: u32) -> String {
    let message = if message.trim().is_empty() {
        "Error desconocido"
    } else {
        message.trim()
    };
    if source.is_empty() {
        message.to_string()
    } else {
        format!("{} ({}:{}:{})", message, source, line, column)
    }
}

fn report(description: &str, fatal: bool) {
    analytics::track_event(
        "exception",
        &serde_json::json!({ "description": description, "fatal": fatal }),
    );
}

fn rejection_reason(event: &PromiseRejectionEvent) -> String {
    let reason = event.reason();
    reason
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&reason, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", reason))
}

pub fn install() -> Result<(), JsValue> {
    if INSTALLED.with(|flag| flag.replace(true)) {
        log::warn!("⚠️ [ERRORES] install() ya fue llamado, ignorando");
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

    on_event(&win, "error", |event: ErrorEvent| {
        let description = describe_error(&event.message(), &event.filename(), event.lineno(), event.colno());
        log::error!("❌ [ERRORES] {}", description);
        report(&description, false);
    })?;

    on_event(&win, "unhandledrejection", |event: PromiseRejectionEvent| {
        let description = format!("Promesa rechazada: {}", rejection_reason(&event));
        log::error!("❌ [ERRORES] {}", description);
        report(&description, false);
    })?;

    log::debug!("[ERRORES] Manejadores globales instalados");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_error_with_location() {
        assert_eq!(
            describe_error("boom", "app.js", 10, 4),
            "boom (app.js:10:4)"
        );
    }

    #[test]
    fn describes_error_without_source() {
        assert_eq!(describe_error("  boom ", "", 0, 0), "boom");
        assert_eq!(describe_error("", "", 0, 0), "Error desconocido");
    }
}
