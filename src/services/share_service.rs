// ============================================================================
// SHARE SERVICE - navigator.share → clipboard → copia manual
// ============================================================================
// share/clipboard son las únicas APIs asíncronas reales del sitio; si fallan
// se cae de forma síncrona a la copia manual con un textarea oculto.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Hoja de compartir nativa
    Shared,
    /// Copiado con navigator.clipboard
    Copied,
    /// Copiado con execCommand("copy")
    ManualCopy,
    Failed,
}

impl ShareOutcome {
    /// Mensaje para el usuario (None cuando el sistema ya dio feedback)
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied | ShareOutcome::ManualCopy => Some("Enlace copiado al portapapeles"),
            ShareOutcome::Failed => Some("No se pudo compartir. Copia el enlace manualmente."),
        }
    }
}

fn navigator_method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

async fn call_promise(function: &js_sys::Function, this: &JsValue, arg: &JsValue) -> Result<(), JsValue> {
    let promise = function
        .call1(this, arg)?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await.map(|_| ())
}

async fn native_share(title: &str, text: &str, url: &str) -> Result<(), JsValue> {
    let navigator: JsValue = window().ok_or("No window")?.navigator().into();
    let share = navigator_method(&navigator, "share").ok_or("navigator.share no disponible")?;

    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &"title".into(), &title.into())?;
    js_sys::Reflect::set(&data, &"text".into(), &text.into())?;
    js_sys::Reflect::set(&data, &"url".into(), &url.into())?;

    call_promise(&share, &navigator, &data.into()).await
}

async fn clipboard_write(text: &str) -> Result<(), JsValue> {
    let navigator: JsValue = window().ok_or("No window")?.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard no disponible"));
    }
    let write_text = navigator_method(&clipboard, "writeText").ok_or("writeText no disponible")?;
    call_promise(&write_text, &clipboard, &JsValue::from_str(text)).await
}

/// Copia síncrona con un textarea fuera de pantalla
pub fn copy_manually(text: &str) -> Result<bool, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    textarea.set_attribute("style", "position:fixed;top:-1000px;opacity:0;")?;
    body.append_child(&textarea)?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|html| html.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);

    body.remove_child(&textarea)?;
    Ok(copied)
}

fn manual_fallback(text: &str) -> ShareOutcome {
    match copy_manually(text) {
        Ok(true) => ShareOutcome::ManualCopy,
        Ok(false) => ShareOutcome::Failed,
        Err(e) => {
            log::warn!("⚠️ [SHARE] Copia manual falló: {:?}", e);
            ShareOutcome::Failed
        }
    }
}

/// Copiar texto (clipboard con fallback manual)
pub async fn copy_text(text: &str) -> ShareOutcome {
    match clipboard_write(text).await {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::debug!("[SHARE] clipboard falló, copia manual: {:?}", e);
            manual_fallback(text)
        }
    }
}

/// Compartir con la hoja nativa; si no hay o falla, copiar la URL
pub async fn share_or_copy(title: &str, text: &str, url: &str) -> ShareOutcome {
    match native_share(title, text, url).await {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => {
            log::debug!("[SHARE] share nativo no disponible: {:?}", e);
            copy_text(url).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_share_needs_no_extra_message() {
        assert_eq!(ShareOutcome::Shared.user_message(), None);
        assert_eq!(
            ShareOutcome::Copied.user_message(),
            ShareOutcome::ManualCopy.user_message()
        );
        assert!(ShareOutcome::Failed.user_message().is_some());
    }
}
