// ============================================================================
// NOTIFICATION VIEW - Banner de avisos (AppEvent::Notify)
// ============================================================================
// Cada aviso programa su propio auto-cierre; si el usuario ya lo cerró, el
// timer simplemente no encuentra el nodo conectado.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{append_child, body, get_element_by_id, on_click, ElementBuilder};
use crate::state::{AppContext, AppEvent, NotificationKind};

const CONTAINER_ID: &str = "notification-container";

fn container() -> Result<Element, JsValue> {
    if let Some(existing) = get_element_by_id(CONTAINER_ID) {
        return Ok(existing);
    }
    let container = ElementBuilder::new("div")?
        .id(CONTAINER_ID)
        .class("notification-container")
        .build();
    body()
        .ok_or_else(|| JsValue::from_str("No body"))?
        .append_child(&container)?;
    Ok(container)
}

fn dismiss(notification: &Element) {
    if notification.is_connected() {
        notification.remove();
    }
}

/// Muestra un aviso y programa su cierre automático
pub fn show_notification(message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    let notification = ElementBuilder::new("div")?
        .class(&format!("notification notification-{}", kind.as_str()))
        .attr("role", if kind == NotificationKind::Error { "alert" } else { "status" })?
        .build();

    let text = ElementBuilder::new("span")?
        .class("notification-message")
        .text(message)
        .build();
    let close_btn = ElementBuilder::new("button")?
        .class("notification-close")
        .attr("type", "button")?
        .attr("aria-label", "Cerrar aviso")?
        .text("×")
        .build();

    {
        let notification = notification.clone();
        on_click(&close_btn, move |_e: MouseEvent| dismiss(&notification))?;
    }

    append_child(&notification, &text)?;
    append_child(&notification, &close_btn)?;
    append_child(&container()?, &notification)?;

    Timeout::new(CONFIG.timing.notification_dismiss_ms, move || dismiss(&notification)).forget();
    Ok(())
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    ctx.bus.subscribe(|event| {
        if let AppEvent::Notify { message, kind } = event {
            if let Err(e) = show_notification(message, *kind) {
                log::error!("❌ [NOTIFY] No se pudo mostrar el aviso: {:?}", e);
            }
        }
    });
    Ok(())
}
