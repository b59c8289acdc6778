// ============================================================================
// EVENT MANAGER - Modal de eventos, "añadir al calendario" y compartir
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{
    append_child, get_attribute, on_click, open_in_new_tab, query_selector_all, set_class,
    text_of, ElementBuilder,
};
use crate::models::calendar_event::CalendarEvent;
use crate::services::{analytics, calendar_service, share_service};
use crate::state::{AppContext, NotificationKind};
use crate::views::modal::Modal;

const EVENT_MODAL_ID: &str = "event-modal";

/// Lee el evento de los `data-*` de la tarjeta; sin título o fecha no hay evento
pub fn event_from_card(card: &Element) -> Option<CalendarEvent> {
    let title = get_attribute(card, "data-title").or_else(|| {
        card.query_selector("h3, .event-title")
            .ok()
            .flatten()
            .map(|h| text_of(&h))
            .filter(|t| !t.is_empty())
    })?;
    Some(CalendarEvent {
        title,
        date: get_attribute(card, "data-date")?,
        time: get_attribute(card, "data-time"),
        location: get_attribute(card, "data-location"),
        description: get_attribute(card, "data-description"),
    })
}

/// Modal cacheado: los huecos se rellenan in situ y los opcionales se ocultan
struct EventModal {
    modal: Modal,
    title: Element,
    date: Element,
    time: Element,
    location: Element,
    description: Element,
    current: RefCell<Option<CalendarEvent>>,
}

fn fill(slot: &Element, value: Option<&str>) {
    match value {
        Some(text) => {
            slot.set_text_content(Some(text));
            let _ = set_class(slot, "hidden", false);
            let _ = slot.remove_attribute("hidden");
        }
        None => {
            slot.set_text_content(None);
            let _ = set_class(slot, "hidden", true);
            let _ = slot.set_attribute("hidden", "");
        }
    }
}

impl EventModal {
    fn new(ctx: &AppContext) -> Result<Rc<Self>, JsValue> {
        let modal = Modal::ensure(ctx, EVENT_MODAL_ID, "event-modal")?;
        let body = modal.body();

        let title = ElementBuilder::new("h2")?.class("event-modal-title").build();
        let date = ElementBuilder::new("p")?.class("event-modal-date").build();
        let time = ElementBuilder::new("p")?.class("event-modal-time").build();
        let location = ElementBuilder::new("p")?.class("event-modal-location").build();
        let description = ElementBuilder::new("p")?.class("event-modal-description").build();
        for slot in [&title, &date, &time, &location, &description] {
            append_child(body, slot)?;
        }

        let actions = ElementBuilder::new("div")?.class("event-modal-actions").build();
        let calendar_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "button")?
            .text("Añadir al calendario")
            .build();
        let share_btn = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("Compartir")
            .build();
        append_child(&actions, &calendar_btn)?;
        append_child(&actions, &share_btn)?;
        append_child(body, &actions)?;

        let this = Rc::new(Self {
            modal,
            title,
            date,
            time,
            location,
            description,
            current: RefCell::new(None),
        });

        {
            let this = this.clone();
            let ctx = ctx.clone();
            on_click(&calendar_btn, move |_e: MouseEvent| this.add_to_calendar(&ctx))?;
        }
        {
            let this = this.clone();
            let ctx = ctx.clone();
            on_click(&share_btn, move |_e: MouseEvent| this.share(&ctx))?;
        }
        Ok(this)
    }

    fn show(&self, event: CalendarEvent) {
        fill(&self.title, Some(&event.title));
        fill(&self.date, Some(&event.date));
        fill(&self.time, event.time.as_deref());
        fill(&self.location, event.location.as_deref());
        fill(&self.description, event.description.as_deref());
        analytics::track_event("view_event", &serde_json::json!({ "event_title": event.title }));
        *self.current.borrow_mut() = Some(event);
        self.modal.open();
    }

    fn add_to_calendar(&self, ctx: &AppContext) {
        let Some(event) = self.current.borrow().clone() else {
            return;
        };
        match calendar_service::google_calendar_url(&event).and_then(|url| open_in_new_tab(&url)) {
            Ok(()) => {
                analytics::track_event("add_to_calendar", &serde_json::json!({ "event_title": event.title }));
            }
            Err(e) => {
                log::error!("❌ [EVENTOS] No se pudo abrir Google Calendar: {:?}", e);
                ctx.bus.notify("No se pudo crear el evento en el calendario", NotificationKind::Error);
            }
        }
    }

    fn share(&self, ctx: &AppContext) {
        let Some(event) = self.current.borrow().clone() else {
            return;
        };
        let bus = ctx.bus.clone();
        let url = format!("{}/#eventos", CONFIG.site_url.trim_end_matches('/'));
        let text = format!("{} · {}", event.title, event.date);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = share_service::share_or_copy(&event.title, &text, &url).await;
            log::info!("🔗 [EVENTOS] Compartir: {:?}", outcome);
            if let Some(message) = outcome.user_message() {
                let kind = if outcome == share_service::ShareOutcome::Failed {
                    NotificationKind::Error
                } else {
                    NotificationKind::Success
                };
                bus.notify(message, kind);
            }
        });
    }
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    let cards = query_selector_all(".event-card")?;
    if cards.is_empty() {
        return Ok(());
    }
    let event_modal = EventModal::new(ctx)?;

    for card in cards {
        let trigger = card
            .query_selector(".btn-event-details, [data-open-event]")?
            .unwrap_or_else(|| card.clone());
        let event_modal = event_modal.clone();
        let bus = ctx.bus.clone();
        on_click(&trigger, move |_e: MouseEvent| match event_from_card(&card) {
            Some(event) => event_modal.show(event),
            None => {
                log::warn!("⚠️ [EVENTOS] Tarjeta sin data-title/data-date");
                bus.notify("No se pudo cargar la información del evento", NotificationKind::Error);
            }
        })?;
    }
    log::info!("📅 [EVENTOS] Modal de eventos listo");
    Ok(())
}
