// ============================================================================
// ANALYTICS - Wrapper oportunista sobre `window.gtag`
// ============================================================================
// Sin gtag (cookies rechazadas, bloqueador...) las llamadas no hacen nada.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const GTAG_SCRIPT_URL: &str = "https://www.googletagmanager.com/gtag/js?id=";

/// Devuelve `window.gtag` si existe y es una función
fn gtag_function() -> Option<js_sys::Function> {
    let window = window()?;
    let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
    gtag.dyn_into::<js_sys::Function>().ok()
}

/// `gtag('event', name, params)`; params es JSON serializable
pub fn track_event(name: &str, params: &serde_json::Value) {
    let Some(gtag) = gtag_function() else {
        return;
    };
    let params = js_sys::JSON::parse(&params.to_string()).unwrap_or(JsValue::UNDEFINED);
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(name),
        &params,
    ) {
        log::debug!("[ANALYTICS] gtag falló: {:?}", e);
    }
}

/// Inyecta el script de Google Analytics y define `dataLayer`/`gtag`
pub fn load_google_analytics(measurement_id: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if document.get_element_by_id("ga-script").is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_id("ga-script");
    script.set_async(true);
    script.set_src(&format!("{}{}", GTAG_SCRIPT_URL, measurement_id));

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("No <head>"))?;
    head.append_child(&script)?;

    // gtag estándar: empuja sus argumentos a dataLayer
    let bootstrap = js_sys::Function::new_with_args(
        "id",
        "window.dataLayer = window.dataLayer || [];\
         window.gtag = function(){ window.dataLayer.push(arguments); };\
         window.gtag('js', new Date());\
         window.gtag('config', id, { anonymize_ip: true });",
    );
    bootstrap.call1(&JsValue::NULL, &JsValue::from_str(measurement_id))?;

    log::info!("📊 [ANALYTICS] Google Analytics cargado ({})", measurement_id);
    Ok(())
}
