// ============================================================================
// COOKIE CONSENT - UNDECIDED → ACCEPTED | REJECTED
// ============================================================================

use chrono::{DateTime, Utc};
use crate::models::cookie::CookiePreference;
use crate::services::storage_service::{load_json, save_json, KeyValueStore, KEY_COOKIE_CONSENT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentStatus {
    Undecided,
    Accepted,
    Rejected,
}

impl ConsentStatus {
    /// Solo con consentimiento se cargan scripts de terceros
    pub fn allows_analytics(&self) -> bool {
        *self == ConsentStatus::Accepted
    }
}

pub fn load_status(store: &dyn KeyValueStore) -> ConsentStatus {
    match load_json::<CookiePreference>(store, KEY_COOKIE_CONSENT) {
        Ok(Some(pref)) if pref.accepted => ConsentStatus::Accepted,
        Ok(Some(_)) => ConsentStatus::Rejected,
        Ok(None) => ConsentStatus::Undecided,
        Err(e) => {
            log::warn!("⚠️ [COOKIES] Preferencia ilegible, se vuelve a preguntar: {}", e);
            ConsentStatus::Undecided
        }
    }
}

/// Retardo tras el que mostrar el banner; None si ya hay decisión guardada
pub fn banner_delay(status: ConsentStatus, delay_ms: u32) -> Option<u32> {
    match status {
        ConsentStatus::Undecided => Some(delay_ms),
        _ => None,
    }
}

/// Guarda (sobrescribe) la respuesta del usuario
pub fn record_decision(store: &dyn KeyValueStore, accepted: bool, now: DateTime<Utc>) -> ConsentStatus {
    let pref = CookiePreference {
        accepted,
        timestamp: now,
    };
    if let Err(e) = save_json(store, KEY_COOKIE_CONSENT, &pref) {
        log::warn!("⚠️ [COOKIES] No se pudo recordar la preferencia: {}", e);
    }
    if accepted {
        ConsentStatus::Accepted
    } else {
        ConsentStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::services::storage_service::MemoryStore;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    #[test]
    fn undecided_visitor_sees_banner_after_delay() {
        let store = MemoryStore::new();
        let status = load_status(&store);
        assert_eq!(status, ConsentStatus::Undecided);
        assert_eq!(banner_delay(status, 2000), Some(2000));
    }

    #[test]
    fn accepted_consent_survives_reload() {
        let store = MemoryStore::new();
        let status = record_decision(&store, true, now());
        assert!(status.allows_analytics());

        // recarga simulada: mismo almacén, estado nuevo
        let reloaded = load_status(&store);
        assert_eq!(reloaded, ConsentStatus::Accepted);
        assert_eq!(banner_delay(reloaded, 2000), None);
    }

    #[test]
    fn rejection_is_durable_and_blocks_analytics() {
        let store = MemoryStore::new();
        record_decision(&store, false, now());
        let reloaded = load_status(&store);
        assert_eq!(reloaded, ConsentStatus::Rejected);
        assert!(!reloaded.allows_analytics());
        assert_eq!(banner_delay(reloaded, 2000), None);
    }

    #[test]
    fn later_decision_overwrites_previous() {
        let store = MemoryStore::new();
        record_decision(&store, false, now());
        record_decision(&store, true, now());
        assert_eq!(load_status(&store), ConsentStatus::Accepted);
    }

    #[test]
    fn stored_json_shape() {
        let store = MemoryStore::new();
        record_decision(&store, true, now());
        let raw = store.get_item(KEY_COOKIE_CONSENT).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["accepted"], true);
        assert!(value["timestamp"].as_str().unwrap().starts_with("2026-10-16T09:30:00"));
    }
}
