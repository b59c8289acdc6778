// ============================================================================
// VERSE OF THE DAY - Rotación del versículo, una vez por día
// ============================================================================
// La elección es uniforme y sin memoria: puede repetirse el mismo versículo.
// ============================================================================

use chrono::NaiveDate;
use crate::models::verse::{verse_list, StoredVerse, Verse, VERSES};
use crate::services::storage_service::{load_json, save_json, KeyValueStore, KEY_ULTIMO_VERSICULO};

/// Clave de día con la que se compara el versículo guardado
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `roll` en [0, 1) → índice en [0, len)
pub fn pick_index(roll: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    ((roll * len as f64) as usize).min(len - 1)
}

pub fn verse_for_roll(roll: f64) -> Verse {
    let verses = verse_list();
    verses[pick_index(roll, VERSES.len())].clone()
}

#[derive(Clone, Debug, PartialEq)]
pub enum DailyCheck {
    /// No hay versículo de hoy: hay que rotar
    Rotate,
    /// Ya se mostró uno hoy
    Keep(Verse),
}

pub fn stored_verse(store: &dyn KeyValueStore) -> Option<StoredVerse> {
    match load_json::<StoredVerse>(store, KEY_ULTIMO_VERSICULO) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("⚠️ [VERSICULO] Versículo guardado ilegible: {}", e);
            None
        }
    }
}

pub fn check_daily(store: &dyn KeyValueStore, today: NaiveDate) -> DailyCheck {
    match stored_verse(store) {
        Some(stored) if stored.date == date_string(today) => DailyCheck::Keep(stored.verse),
        _ => DailyCheck::Rotate,
    }
}

/// Elige un versículo y lo guarda con la fecha de hoy
pub fn rotate(store: &dyn KeyValueStore, today: NaiveDate, roll: f64) -> Verse {
    let verse = verse_for_roll(roll);
    let record = StoredVerse {
        verse: verse.clone(),
        date: date_string(today),
    };
    if let Err(e) = save_json(store, KEY_ULTIMO_VERSICULO, &record) {
        log::warn!("⚠️ [VERSICULO] No se pudo guardar el versículo: {}", e);
    }
    verse
}

/// Comprobación diaria completa: devuelve el versículo a mostrar y si hubo rotación
pub fn resolve_daily(store: &dyn KeyValueStore, today: NaiveDate, roll: f64) -> (Verse, bool) {
    match check_daily(store, today) {
        DailyCheck::Keep(verse) => (verse, false),
        DailyCheck::Rotate => (rotate(store, today, roll), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage_service::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn roll_maps_uniformly_onto_the_list() {
        assert_eq!(pick_index(0.0, 6), 0);
        assert_eq!(pick_index(0.5, 6), 3);
        assert_eq!(pick_index(0.999_999, 6), 5);
        assert_eq!(pick_index(1.0, 6), 5);
        assert_eq!(pick_index(f64::NAN, 6), 0);
    }

    #[test]
    fn daily_check_rotates_at_most_once_per_day() {
        let store = MemoryStore::new();
        let (first, rotated) = resolve_daily(&store, day(16), 0.2);
        assert!(rotated);
        let (second, rotated_again) = resolve_daily(&store, day(16), 0.9);
        assert!(!rotated_again);
        assert_eq!(first, second);
    }

    #[test]
    fn new_day_rotates_again() {
        let store = MemoryStore::new();
        resolve_daily(&store, day(16), 0.0);
        assert_eq!(check_daily(&store, day(17)), DailyCheck::Rotate);
        let (_, rotated) = resolve_daily(&store, day(17), 0.0);
        assert!(rotated);
    }

    #[test]
    fn repeats_are_allowed() {
        let store = MemoryStore::new();
        let a = rotate(&store, day(16), 0.1);
        let b = rotate(&store, day(16), 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn corrupt_record_triggers_rotation() {
        let store = MemoryStore::new();
        store.set_item(KEY_ULTIMO_VERSICULO, "not json").unwrap();
        assert_eq!(check_daily(&store, day(16)), DailyCheck::Rotate);
    }

    #[test]
    fn stored_record_uses_verse_and_date_keys() {
        let store = MemoryStore::new();
        rotate(&store, day(16), 0.0);
        let raw = store.get_item(KEY_ULTIMO_VERSICULO).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["date"], "2026-10-16");
        assert_eq!(value["verse"]["citation"], "Juan 3:16");
    }
}
