// ============================================================================
// VERSE WIDGET - Versículo del día con transición de opacidad
// ============================================================================

use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click, set_class};
use crate::models::verse::Verse;
use crate::state::AppContext;
use crate::viewmodels::verse::{resolve_daily, rotate};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn roll() -> f64 {
    js_sys::Math::random()
}

#[derive(Clone)]
struct VerseSlots {
    text: Element,
    citation: Element,
    container: Option<Element>,
}

impl VerseSlots {
    fn find() -> Option<Self> {
        Some(Self {
            text: get_element_by_id("versiculo-texto")?,
            citation: get_element_by_id("versiculo-cita")?,
            container: get_element_by_id("versiculo-del-dia"),
        })
    }

    fn write(&self, verse: &Verse) {
        self.text.set_text_content(Some(&format!("\u{201c}{}\u{201d}", verse.text)));
        self.citation.set_text_content(Some(&verse.citation));
    }

    fn fade_target(&self) -> &Element {
        self.container.as_ref().unwrap_or(&self.text)
    }

    /// fade-out → cambio de texto → fade-in
    fn transition_to(&self, verse: Verse) {
        let target = self.fade_target().clone();
        let _ = set_class(&target, "fade-in", false);
        let _ = set_class(&target, "fade-out", true);

        let slots = self.clone();
        Timeout::new(CONFIG.timing.verse_fade_ms, move || {
            slots.write(&verse);
            let _ = set_class(&target, "fade-out", false);
            let _ = set_class(&target, "fade-in", true);
        })
        .forget();
    }
}

/// Fuerza una rotación (botón "Nuevo versículo")
fn show_next(ctx: &AppContext, slots: &VerseSlots) {
    let verse = rotate(ctx.store.as_ref(), today(), roll());
    log::debug!("[VERSICULO] Nuevo: {}", verse.citation);
    slots.transition_to(verse);
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    let Some(slots) = VerseSlots::find() else {
        return Ok(());
    };

    let (verse, rotated) = resolve_daily(ctx.store.as_ref(), today(), roll());
    if rotated {
        log::info!("📖 [VERSICULO] Versículo del día: {}", verse.citation);
        slots.transition_to(verse);
    } else {
        slots.write(&verse);
    }

    if let Some(button) = get_element_by_id("nuevo-versiculo") {
        let ctx = ctx.clone();
        on_click(&button, move |_e: MouseEvent| show_next(&ctx, &slots))?;
    }
    Ok(())
}
