// ============================================================================
// DONATION MANAGER - Tarjetas de donación y modal de información
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{
    append_child, on_click, open_in_new_tab, query_selector_all, set_class, text_of,
    ElementBuilder,
};
use crate::models::donation::DonationMethod;
use crate::services::{analytics, share_service};
use crate::state::{AppContext, NotificationKind};
use crate::viewmodels::donation::{donation_info, resolve_method, DonationInfo};
use crate::views::modal::Modal;

const DONATION_MODAL_ID: &str = "donation-modal";

fn card_title(card: &Element) -> String {
    card.query_selector("h3, .donation-title")
        .ok()
        .flatten()
        .map(|h| text_of(&h))
        .unwrap_or_else(|| text_of(card))
}

struct DonationModal {
    modal: Modal,
    title: Element,
    description: Element,
    details: Element,
    copy_btn: Element,
    link_btn: Element,
    current: RefCell<Option<DonationInfo>>,
}

impl DonationModal {
    fn new(ctx: &AppContext) -> Result<Rc<Self>, JsValue> {
        let modal = Modal::ensure(ctx, DONATION_MODAL_ID, "donation-modal")?;
        let body = modal.body();

        let title = ElementBuilder::new("h2")?.class("donation-modal-title").build();
        let description = ElementBuilder::new("p")?.class("donation-modal-description").build();
        let details = ElementBuilder::new("dl")?.class("donation-modal-details").build();
        let copy_btn = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("Copiar")
            .build();
        let link_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "button")?
            .text("Ir a PayPal")
            .build();
        for child in [&title, &description, &details, &copy_btn, &link_btn] {
            append_child(body, child)?;
        }

        let this = Rc::new(Self {
            modal,
            title,
            description,
            details,
            copy_btn,
            link_btn,
            current: RefCell::new(None),
        });

        {
            let button = this.copy_btn.clone();
            let this = this.clone();
            let ctx = ctx.clone();
            on_click(&button, move |_e: MouseEvent| this.copy_value(&ctx))?;
        }
        {
            let button = this.link_btn.clone();
            let this = this.clone();
            let ctx = ctx.clone();
            on_click(&button, move |_e: MouseEvent| this.open_link(&ctx))?;
        }
        Ok(this)
    }

    /// Sustituye el contenido del nodo cacheado por el del método
    fn show(&self, method: DonationMethod, info: DonationInfo) -> Result<(), JsValue> {
        self.title.set_text_content(Some(&info.title));
        self.description.set_text_content(Some(&info.description));

        self.details.set_inner_html("");
        for (label, value) in &info.details {
            let dt = ElementBuilder::new("dt")?.text(label).build();
            let dd = ElementBuilder::new("dd")?.text(value).build();
            append_child(&self.details, &dt)?;
            append_child(&self.details, &dd)?;
        }
        set_class(&self.details, "hidden", info.details.is_empty())?;
        set_class(&self.copy_btn, "hidden", info.copy_value.is_none())?;
        set_class(&self.link_btn, "hidden", info.external_url.is_none())?;

        analytics::track_event("donation_intent", &serde_json::json!({ "method": method.as_str() }));
        *self.current.borrow_mut() = Some(info);
        self.modal.open();
        Ok(())
    }

    fn copy_value(&self, ctx: &AppContext) {
        let Some(value) = self.current.borrow().as_ref().and_then(|i| i.copy_value.clone()) else {
            return;
        };
        let bus = ctx.bus.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match share_service::copy_text(&value).await {
                share_service::ShareOutcome::Failed => {
                    bus.notify(format!("Copia manualmente: {}", value), NotificationKind::Error)
                }
                _ => bus.notify("Copiado al portapapeles", NotificationKind::Success),
            }
        });
    }

    fn open_link(&self, ctx: &AppContext) {
        let Some(url) = self.current.borrow().as_ref().and_then(|i| i.external_url.clone()) else {
            return;
        };
        if let Err(e) = open_in_new_tab(&url) {
            log::error!("❌ [DONACION] No se pudo abrir {}: {:?}", url, e);
            ctx.bus.notify("No se pudo abrir la página de donación", NotificationKind::Error);
        }
    }
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    let cards = query_selector_all(".donation-card")?;
    if cards.is_empty() {
        return Ok(());
    }
    let donation_modal = DonationModal::new(ctx)?;

    for card in cards {
        let trigger = card
            .query_selector(".btn-donate, button")?
            .unwrap_or_else(|| card.clone());
        let donation_modal = donation_modal.clone();
        let ctx = ctx.clone();
        on_click(&trigger, move |_e: MouseEvent| {
            let title = card_title(&card);
            let method = resolve_method(&title, &ctx.bus);
            let Some(info) = donation_info(method, &CONFIG.donation) else {
                return;
            };
            log::info!("💝 [DONACION] Método {}", method.as_str());
            if let Err(e) = donation_modal.show(method, info) {
                log::error!("❌ [DONACION] Error mostrando el modal: {:?}", e);
            }
        })?;
    }
    Ok(())
}
