// ============================================================================
// COOKIE BANNER - Consentimiento y carga condicional de analytics
// ============================================================================

use chrono::Utc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click, set_attribute, set_class};
use crate::services::analytics;
use crate::state::{AppContext, NotificationKind};
use crate::viewmodels::cookie_consent::{banner_delay, load_status, record_decision, ConsentStatus};

fn load_analytics_if_allowed(status: ConsentStatus) {
    if !status.allows_analytics() || !CONFIG.has_analytics() {
        return;
    }
    if let Err(e) = analytics::load_google_analytics(&CONFIG.analytics.measurement_id) {
        log::error!("❌ [COOKIES] Error cargando analytics: {:?}", e);
    }
}

fn set_banner_visible(banner: &Element, visible: bool) {
    let _ = set_class(banner, "visible", visible);
    let _ = set_attribute(banner, "aria-hidden", if visible { "false" } else { "true" });
}

fn bind_choice(ctx: &AppContext, banner: &Element, button_id: &str, accepted: bool) -> Result<(), JsValue> {
    let Some(button) = get_element_by_id(button_id) else {
        return Ok(());
    };
    let ctx = ctx.clone();
    let banner = banner.clone();
    on_click(&button, move |_e: MouseEvent| {
        let status = record_decision(ctx.store.as_ref(), accepted, Utc::now());
        set_banner_visible(&banner, false);
        log::info!("🍪 [COOKIES] Preferencia: {:?}", status);
        load_analytics_if_allowed(status);
        if accepted {
            ctx.bus.notify("Preferencias de cookies guardadas", NotificationKind::Success);
        }
    })
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    let status = load_status(ctx.store.as_ref());
    load_analytics_if_allowed(status);

    let Some(banner) = get_element_by_id("cookie-banner") else {
        return Ok(());
    };
    bind_choice(ctx, &banner, "accept-cookies", true)?;
    bind_choice(ctx, &banner, "reject-cookies", false)?;

    if let Some(delay) = banner_delay(status, CONFIG.timing.cookie_banner_delay_ms) {
        Timeout::new(delay, move || set_banner_visible(&banner, true)).forget();
    }
    Ok(())
}
