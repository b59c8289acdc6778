// ============================================================================
// ACCESSIBILITY MANAGER - Atajos, región ARIA live y trampa de foco
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node};
use crate::dom::{
    active_element, body, document, get_element_by_id, on_click, on_keydown, query_all_in,
    set_class, ElementBuilder, ListenerHandle,
};
use crate::services::storage_service::{load_bool, save_bool, KeyValueStore, KEY_HIGH_CONTRAST, KEY_THEME};
use crate::state::{AppContext, AppEvent};
use crate::viewmodels::focus_trap::{trap_target, FOCUSABLE_SELECTOR};
use crate::viewmodels::shortcuts::{resolve_shortcut, Shortcut, Theme};
use crate::views::{navigation, scroll_manager};

const LIVE_REGION_ID: &str = "aria-live-region";

/// Región live (se crea si la página no la trae)
fn live_region() -> Result<Element, JsValue> {
    if let Some(region) = get_element_by_id(LIVE_REGION_ID) {
        return Ok(region);
    }
    let region = ElementBuilder::new("div")?
        .id(LIVE_REGION_ID)
        .class("sr-only")
        .attr("aria-live", "polite")?
        .attr("aria-atomic", "true")?
        .build();
    body()
        .ok_or_else(|| JsValue::from_str("No body"))?
        .append_child(&region)?;
    Ok(region)
}

/// Anunciar mensaje a lectores de pantalla
pub fn announce(message: &str) {
    let region = match live_region() {
        Ok(r) => r,
        Err(e) => {
            log::warn!("⚠️ [A11Y] Región live no disponible: {:?}", e);
            return;
        }
    };
    // Vaciar primero para que el lector repita mensajes iguales
    region.set_text_content(Some(""));
    let message = message.to_string();
    Timeout::new(50, move || region.set_text_content(Some(&message))).forget();
}

fn focusables(container: &Element) -> Vec<HtmlElement> {
    query_all_in(container, FOCUSABLE_SELECTOR)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Trampa de Tab/Shift+Tab sobre un contenedor; se retira al hacer drop.
/// Escucha en `document` para recuperar el foco aunque esté fuera del modal.
fn install_focus_trap(container: &Element) -> Result<ListenerHandle, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let trap_root = container.clone();
    ListenerHandle::new(&doc, "keydown", move |event: web_sys::Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key_event.key() != "Tab" {
            return;
        }
        let items = focusables(&trap_root);
        let current = active_element().and_then(|active| {
            let active: &Node = active.as_ref();
            items.iter().position(|item| item.is_same_node(Some(active)))
        });
        if let Some(target) = trap_target(current, items.len(), key_event.shift_key()) {
            key_event.prevent_default();
            let _ = items[target].focus();
        }
    })
}

fn apply_high_contrast(enabled: bool) {
    if let Some(page) = body() {
        let _ = set_class(&page, "high-contrast", enabled);
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn toggle_high_contrast(ctx: &AppContext) {
    let enabled = !load_bool(ctx.store.as_ref(), KEY_HIGH_CONTRAST, false);
    save_bool(ctx.store.as_ref(), KEY_HIGH_CONTRAST, enabled);
    apply_high_contrast(enabled);
    announce(if enabled {
        "Alto contraste activado"
    } else {
        "Alto contraste desactivado"
    });
}

fn stored_theme(ctx: &AppContext) -> Theme {
    let raw = ctx.store.get_item(KEY_THEME).unwrap_or_else(|e| {
        log::warn!("⚠️ [A11Y] {}", e);
        None
    });
    Theme::parse(raw.as_deref())
}

pub fn toggle_theme(ctx: &AppContext) {
    let theme = stored_theme(ctx).toggled();
    if let Err(e) = ctx.store.set_item(KEY_THEME, theme.as_str()) {
        log::warn!("⚠️ [A11Y] {}", e);
    }
    apply_theme(theme);
    announce(match theme {
        Theme::Dark => "Tema oscuro activado",
        Theme::Light => "Tema claro activado",
    });
}

/// ¿El foco está en un campo de texto?
fn is_typing(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| {
            let tag = el.tag_name().to_lowercase();
            tag == "input" || tag == "textarea" || tag == "select" || el.has_attribute("contenteditable")
        })
        .unwrap_or(false)
}

fn bind_shortcuts(ctx: &AppContext) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let ctx = ctx.clone();
    on_keydown(&doc, move |event: KeyboardEvent| {
        let shortcut = resolve_shortcut(
            &event.key(),
            &event.code(),
            event.alt_key(),
            event.ctrl_key() || event.meta_key(),
            is_typing(&event),
        );
        let Some(shortcut) = shortcut else {
            return;
        };
        if shortcut != Shortcut::Dismiss {
            event.prevent_default();
        }
        log::debug!("[A11Y] Atajo {:?}", shortcut);
        match shortcut {
            Shortcut::Dismiss => ctx.bus.emit(AppEvent::EscapePressed),
            Shortcut::ToggleMenu => navigation::toggle_menu(&ctx),
            Shortcut::ToggleHighContrast => toggle_high_contrast(&ctx),
            Shortcut::ToggleTheme => toggle_theme(&ctx),
            Shortcut::ScrollToTop => scroll_manager::scroll_to_top(),
        }
    })
}

/// Texto para la región live. Los avisos ya llevan role="alert"/"status"
/// y el lector los anuncia solo.
fn announcement_for(event: &AppEvent) -> Option<&'static str> {
    match event {
        AppEvent::ModalOpened { .. } => Some("Ventana abierta. Pulsa Escape para cerrar."),
        _ => None,
    }
}

/// Trampa de foco ligada a ModalOpened / ModalClosed
fn bind_modal_focus(ctx: &AppContext) {
    let trap: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));
    let state = ctx.state.clone();
    ctx.bus.subscribe(move |event| {
        match event {
            AppEvent::ModalOpened { modal_id } => {
                let Some(modal) = get_element_by_id(modal_id) else {
                    return;
                };
                *state.last_focused_element.borrow_mut() = active_element();
                if let Some(first) = focusables(&modal).first() {
                    let _ = first.focus();
                }
                match install_focus_trap(&modal) {
                    Ok(handle) => *trap.borrow_mut() = Some(handle),
                    Err(e) => log::warn!("⚠️ [A11Y] No se pudo instalar la trampa de foco: {:?}", e),
                }
            }
            AppEvent::ModalClosed { .. } => {
                // drop del handle = removeEventListener
                trap.borrow_mut().take();
                if let Some(previous) = state.last_focused_element.borrow_mut().take() {
                    let _ = previous.focus();
                }
            }
            AppEvent::Notify { .. } | AppEvent::EscapePressed => {}
        }
        if let Some(message) = announcement_for(event) {
            announce(message);
        }
    });
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    live_region()?;

    apply_high_contrast(load_bool(ctx.store.as_ref(), KEY_HIGH_CONTRAST, false));
    apply_theme(stored_theme(ctx));

    if let Some(button) = get_element_by_id("high-contrast-toggle") {
        let ctx = ctx.clone();
        on_click(&button, move |_e: MouseEvent| toggle_high_contrast(&ctx))?;
    }
    if let Some(button) = get_element_by_id("theme-toggle") {
        let ctx = ctx.clone();
        on_click(&button, move |_e: MouseEvent| toggle_theme(&ctx))?;
    }

    bind_shortcuts(ctx)?;
    bind_modal_focus(ctx);

    log::info!("♿ [A11Y] Accesibilidad inicializada");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotificationKind;

    #[test]
    fn notifications_are_not_repeated_in_the_live_region() {
        let notify = AppEvent::Notify {
            message: "Comentario publicado".to_string(),
            kind: NotificationKind::Success,
        };
        assert_eq!(announcement_for(&notify), None);
        assert_eq!(announcement_for(&AppEvent::EscapePressed), None);
    }

    #[test]
    fn opening_a_modal_is_announced() {
        let opened = AppEvent::ModalOpened {
            modal_id: "event-modal".to_string(),
        };
        assert!(announcement_for(&opened).is_some());
    }
}
