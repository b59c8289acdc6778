// ============================================================================
// FORMS - Contacto, testimonios, comentarios y newsletter
// ============================================================================
// El envío es simulado: un Timeout sustituye a la llamada de red y siempre
// termina con éxito.
// ============================================================================

use chrono::Utc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};
use crate::config::CONFIG;
use crate::dom::{append_child, get_by_id, get_element_by_id, on_event, set_class, ElementBuilder};
use crate::models::testimonial::Testimonial;
use crate::services::analytics;
use crate::state::{AppContext, NotificationKind};
use crate::viewmodels::feedback::{submit_feedback, FeedbackKind};
use crate::viewmodels::form_validation::{
    validate_contact, validate_field, validate_newsletter, ContactField, ContactForm,
};

fn control(form: &HtmlFormElement, name: &str) -> Option<Element> {
    form.query_selector(&format!("[name='{}']", name)).ok().flatten()
}

/// Valor de un input, select o textarea por `name`
fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(el) = control(form, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn is_checked(form: &HtmlFormElement, name: &str) -> bool {
    control(form, name)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

fn read_contact_form(form: &HtmlFormElement) -> ContactForm {
    ContactForm {
        name: field_value(form, ContactField::Name.input_name()),
        email: field_value(form, ContactField::Email.input_name()),
        phone: field_value(form, ContactField::Phone.input_name()),
        topic: field_value(form, ContactField::Topic.input_name()),
        message: field_value(form, ContactField::Message.input_name()),
        privacy_accepted: is_checked(form, ContactField::Privacy.input_name()),
    }
}

/// Mensaje de error bajo el campo (`#<name>-error`, creado si falta)
fn render_field_error(form: &HtmlFormElement, field: ContactField, error: Option<&str>) {
    let name = field.input_name();
    let Some(input) = control(form, name) else {
        return;
    };
    let _ = set_class(&input, "invalid", error.is_some());
    let _ = input.set_attribute("aria-invalid", if error.is_some() { "true" } else { "false" });

    let error_id = format!("{}-error", name);
    let slot = match get_element_by_id(&error_id) {
        Some(slot) => Some(slot),
        None if error.is_some() => ElementBuilder::new("span")
            .and_then(|b| b.id(&error_id).class("error-message").attr("role", "alert"))
            .map(|b| b.build())
            .ok()
            .and_then(|slot| {
                let parent = input.parent_element()?;
                append_child(&parent, &slot).ok()?;
                Some(slot)
            }),
        None => None,
    };
    if let Some(slot) = slot {
        slot.set_text_content(Some(error.unwrap_or("")));
        let _ = input.set_attribute("aria-describedby", &error_id);
    }
}

fn focus_control(form: &HtmlFormElement, name: &str) {
    if let Some(el) = control(form, name).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let _ = el.focus();
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector("button[type='submit'], button:not([type])")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
}

/// Deshabilita el botón mientras dura el envío simulado; devuelve el texto original
fn set_sending(button: &HtmlButtonElement, sending: bool, label: &str) {
    button.set_disabled(sending);
    button.set_text_content(Some(label));
    let _ = set_class(button, "loading", sending);
}

/// Envío simulado: al vencer el timer se limpia el formulario y se confirma
fn simulate_submit(ctx: &AppContext, form: &HtmlFormElement, form_name: &'static str, confirmation: &'static str) {
    let button = submit_button(form);
    let original = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_else(|| "Enviar".to_string());
    if let Some(button) = &button {
        set_sending(button, true, "Enviando...");
    }

    let form = form.clone();
    let bus = ctx.bus.clone();
    Timeout::new(CONFIG.timing.form_submit_delay_ms, move || {
        form.reset();
        if let Some(button) = &button {
            set_sending(button, false, &original);
        }
        log::info!("📨 [FORMS] Formulario '{}' enviado (simulado)", form_name);
        analytics::track_event("form_submit", &serde_json::json!({ "form": form_name }));
        bus.notify(confirmation, NotificationKind::Success);
    })
    .forget();
}

fn find_form(id: &str) -> Option<HtmlFormElement> {
    get_by_id::<HtmlFormElement>(id)
}

fn bind_contact_form(ctx: &AppContext) -> Result<(), JsValue> {
    let Some(form) = find_form("contact-form") else {
        return Ok(());
    };

    // Revalidación al salir de cada campo
    for field in ContactField::ALL {
        if let Some(input) = control(&form, field.input_name()) {
            let form = form.clone();
            on_event(&input, "blur", move |_e: Event| {
                let values = read_contact_form(&form);
                render_field_error(&form, field, validate_field(field, &values));
            })?;
        }
    }

    let ctx = ctx.clone();
    let submit_form = form.clone();
    on_event(&form, "submit", move |e: Event| {
        e.prevent_default();
        let form = &submit_form;
        let values = read_contact_form(form);
        let report = validate_contact(&values);

        for field in ContactField::ALL {
            render_field_error(form, field, report.error_for(field));
        }

        if let Some(first) = report.errors.first() {
            log::debug!("[FORMS] Contacto con {} errores", report.errors.len());
            focus_control(form, first.field.input_name());
            ctx.bus.notify("Por favor, corrige los errores del formulario", NotificationKind::Error);
            return;
        }
        simulate_submit(&ctx, form, "contact", "¡Mensaje enviado! Te responderemos pronto.");
    })
}

fn render_testimonial(list: &Element, record: &Testimonial) -> Result<(), JsValue> {
    let card = ElementBuilder::new("article")?.class("testimonio-card").build();
    let text = ElementBuilder::new("p")?.class("testimonio-texto").text(&record.text).build();
    let author = ElementBuilder::new("span")?
        .class("testimonio-autor")
        .text(&format!("— {}", record.name))
        .build();
    append_child(&card, &text)?;
    append_child(&card, &author)?;
    list.prepend_with_node_1(&card)?;
    Ok(())
}

fn bind_feedback_form(
    ctx: &AppContext,
    form_id: &str,
    text_field: &'static str,
    list_id: &'static str,
    kind: FeedbackKind,
) -> Result<(), JsValue> {
    let Some(form) = find_form(form_id) else {
        return Ok(());
    };

    if kind == FeedbackKind::Testimonio {
        if let Some(list) = get_element_by_id(list_id) {
            for record in ctx.state.testimonios.borrow().iter() {
                render_testimonial(&list, record)?;
            }
        }
    }

    let ctx = ctx.clone();
    let submit_form = form.clone();
    on_event(&form, "submit", move |e: Event| {
        e.prevent_default();
        let name = field_value(&submit_form, "nombre");
        let text = field_value(&submit_form, text_field);
        match submit_feedback(&ctx, kind, &name, &text, Utc::now()) {
            Ok(record) => {
                submit_form.reset();
                if let Some(list) = get_element_by_id(list_id) {
                    if let Err(e) = render_testimonial(&list, &record) {
                        log::warn!("⚠️ [FORMS] No se pudo pintar el registro: {:?}", e);
                    }
                }
                analytics::track_event("feedback_submit", &serde_json::json!({ "kind": format!("{:?}", kind) }));
            }
            Err(_) => focus_control(&submit_form, text_field),
        }
    })
}

fn bind_newsletter_form(ctx: &AppContext) -> Result<(), JsValue> {
    let Some(form) = find_form("newsletter-form") else {
        return Ok(());
    };
    let ctx = ctx.clone();
    let submit_form = form.clone();
    on_event(&form, "submit", move |e: Event| {
        e.prevent_default();
        let email = field_value(&submit_form, "email");
        if let Some(error) = validate_newsletter(&email) {
            ctx.bus.notify(error, NotificationKind::Error);
            focus_control(&submit_form, "email");
            return;
        }
        simulate_submit(&ctx, &submit_form, "newsletter", "¡Gracias por suscribirte!");
    })
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    bind_contact_form(ctx)?;
    bind_feedback_form(ctx, "testimonio-form", "testimonio", "testimonios-lista", FeedbackKind::Testimonio)?;
    bind_feedback_form(ctx, "comentario-form", "comentario", "comentarios-lista", FeedbackKind::Comentario)?;
    bind_newsletter_form(ctx)?;
    Ok(())
}
