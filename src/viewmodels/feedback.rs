// ============================================================================
// FEEDBACK - Testimonios y comentarios enviados por los visitantes
// ============================================================================

use chrono::{DateTime, Utc};
use crate::models::testimonial::{Testimonial, MIN_TESTIMONIAL_LEN};
use crate::services::storage_service::{load_json, save_json, KeyValueStore, KEY_TESTIMONIOS};
use crate::state::{AppContext, NotificationKind};

pub const TOO_SHORT_MESSAGE: &str = "El testimonio debe tener al menos 10 caracteres";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Persistido en `testimonios_monte_olivos`
    Testimonio,
    /// Solo en memoria
    Comentario,
}

pub fn is_long_enough(text: &str) -> bool {
    text.trim().chars().count() >= MIN_TESTIMONIAL_LEN
}

/// Restaura los testimonios guardados en `AppState.testimonios`.
/// Un registro ilegible se salta sin descartar el resto.
pub fn load_testimonials(ctx: &AppContext) -> usize {
    match load_json::<Vec<serde_json::Value>>(ctx.store.as_ref(), KEY_TESTIMONIOS) {
        Ok(Some(entries)) => {
            let total = entries.len();
            let saved: Vec<Testimonial> = entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect();
            let count = saved.len();
            if count < total {
                log::warn!("⚠️ [FEEDBACK] {} testimonios guardados ilegibles, se ignoran", total - count);
            }
            *ctx.state.testimonios.borrow_mut() = saved;
            log::info!("💾 [FEEDBACK] {} testimonios restaurados", count);
            count
        }
        Ok(None) => 0,
        Err(e) => {
            log::warn!("⚠️ [FEEDBACK] Testimonios guardados ilegibles: {}", e);
            0
        }
    }
}

/// Añade el registro a lo ya guardado, conservando entradas que no se
/// pudieron leer. Si la clave existe pero no es una lista no se toca.
fn append_to_storage(store: &dyn KeyValueStore, record: &Testimonial) -> Result<(), String> {
    let mut entries: Vec<serde_json::Value> = match store.get_item(KEY_TESTIMONIOS)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| format!("'{}' ilegible, no se sobrescribe: {}", KEY_TESTIMONIOS, e))?,
        None => Vec::new(),
    };
    let value = serde_json::to_value(record)
        .map_err(|e| format!("Error serializando testimonio: {}", e))?;
    entries.push(value);
    save_json(store, KEY_TESTIMONIOS, &entries)
}

/// Añade exactamente un registro si el texto es válido y notifica el resultado.
/// Con texto corto no se añade nada y se notifica el error.
pub fn submit_feedback(
    ctx: &AppContext,
    kind: FeedbackKind,
    name: &str,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Testimonial, &'static str> {
    if !is_long_enough(text) {
        ctx.bus.notify(TOO_SHORT_MESSAGE, NotificationKind::Error);
        return Err(TOO_SHORT_MESSAGE);
    }

    let record = Testimonial::new(name, text, now);

    match kind {
        FeedbackKind::Testimonio => {
            ctx.state.testimonios.borrow_mut().push(record.clone());
            if let Err(e) = append_to_storage(ctx.store.as_ref(), &record) {
                log::error!("❌ [FEEDBACK] Error guardando testimonios: {}", e);
            }
            ctx.bus.notify(
                "¡Gracias por compartir tu testimonio!",
                NotificationKind::Success,
            );
        }
        FeedbackKind::Comentario => {
            ctx.state.comentarios.borrow_mut().push(record.clone());
            ctx.bus.notify("Comentario publicado", NotificationKind::Success);
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use chrono::TimeZone;
    use crate::services::storage_service::{KeyValueStore, MemoryStore};
    use crate::state::AppEvent;

    fn context() -> (AppContext, Rc<MemoryStore>, Rc<RefCell<Vec<AppEvent>>>) {
        let store = Rc::new(MemoryStore::new());
        let ctx = AppContext::new(store.clone());
        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            ctx.bus.subscribe(move |event| events.borrow_mut().push(event.clone()));
        }
        (ctx, store, events)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn valid_testimonial_appends_one_and_persists() {
        let (ctx, store, events) = context();
        let record = submit_feedback(
            &ctx,
            FeedbackKind::Testimonio,
            "",
            "Dios ha sido fiel conmigo",
            now(),
        )
        .unwrap();

        assert_eq!(record.name, "Anónimo");
        assert_eq!(ctx.state.testimonial_count(), 1);
        let stored = store.get_item(KEY_TESTIMONIOS).unwrap().unwrap();
        let parsed: Vec<Testimonial> = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, vec![record]);
        assert!(matches!(
            events.borrow().last(),
            Some(AppEvent::Notify { kind: NotificationKind::Success, .. })
        ));
    }

    #[test]
    fn short_testimonial_appends_nothing_and_notifies_error() {
        let (ctx, store, events) = context();
        let result = submit_feedback(&ctx, FeedbackKind::Testimonio, "Ana", "  corto   ", now());

        assert_eq!(result, Err(TOO_SHORT_MESSAGE));
        assert_eq!(ctx.state.testimonial_count(), 0);
        assert!(store.get_item(KEY_TESTIMONIOS).unwrap().is_none());
        assert_eq!(
            *events.borrow(),
            vec![AppEvent::Notify {
                message: TOO_SHORT_MESSAGE.to_string(),
                kind: NotificationKind::Error,
            }]
        );
    }

    #[test]
    fn exactly_ten_characters_is_enough() {
        assert!(is_long_enough("0123456789"));
        assert!(!is_long_enough("012345678"));
        assert!(is_long_enough("ñññññññññá"));
    }

    #[test]
    fn comments_stay_in_memory() {
        let (ctx, store, _) = context();
        submit_feedback(&ctx, FeedbackKind::Comentario, "Luis", "Bendiciones a todos", now()).unwrap();
        assert_eq!(ctx.state.comentarios.borrow().len(), 1);
        assert_eq!(ctx.state.testimonial_count(), 0);
        assert!(store.get_item(KEY_TESTIMONIOS).unwrap().is_none());
    }

    #[test]
    fn stored_testimonials_are_restored_on_load() {
        let (ctx, store, _) = context();
        let saved = vec![Testimonial::new("Pedro", "Gracias por la acogida", now())];
        store
            .set_item(KEY_TESTIMONIOS, &serde_json::to_string(&saved).unwrap())
            .unwrap();
        assert_eq!(load_testimonials(&ctx), 1);
        assert_eq!(*ctx.state.testimonios.borrow(), saved);
    }

    #[test]
    fn unreadable_record_does_not_drop_the_others() {
        let (ctx, store, _) = context();
        let raw = r#"[
            {"name":"Ana","text":"Aquí encontré una familia","submittedAt":"2026-10-01T10:00:00Z"},
            {"name":"Luis","text":"Gracias por las oraciones","submittedAt":1700000000000},
            {"name":"Marta","text":"Bendecida cada domingo","submittedAt":"2026-10-02T10:00:00Z"}
        ]"#;
        store.set_item(KEY_TESTIMONIOS, raw).unwrap();

        assert_eq!(load_testimonials(&ctx), 2);
        submit_feedback(&ctx, FeedbackKind::Testimonio, "Pedro", "Gracias por la acogida", now()).unwrap();

        let stored = store.get_item(KEY_TESTIMONIOS).unwrap().unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&stored).unwrap();
        let names: Vec<&str> = entries.iter().filter_map(|e| e["name"].as_str()).collect();
        assert_eq!(names, vec!["Ana", "Luis", "Marta", "Pedro"]);
        assert_eq!(ctx.state.testimonial_count(), 3);
    }

    #[test]
    fn corrupt_storage_is_not_overwritten() {
        let (ctx, store, _) = context();
        store.set_item(KEY_TESTIMONIOS, "{no es una lista").unwrap();

        assert_eq!(load_testimonials(&ctx), 0);
        submit_feedback(&ctx, FeedbackKind::Testimonio, "Pedro", "Gracias por la acogida", now()).unwrap();

        assert_eq!(
            store.get_item(KEY_TESTIMONIOS).unwrap().as_deref(),
            Some("{no es una lista")
        );
        assert_eq!(ctx.state.testimonial_count(), 1);
    }
}
