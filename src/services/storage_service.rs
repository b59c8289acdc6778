// ============================================================================
// STORAGE SERVICE - localStorage con degradación silenciosa
// ============================================================================
// Todas las operaciones devuelven Result<_, String>; quien llama registra el
// error y sigue ("preferencia no recordada"), nunca rompe la página.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub const KEY_TESTIMONIOS: &str = "testimonios_monte_olivos";
pub const KEY_ULTIMO_VERSICULO: &str = "ultimo_versiculo";
pub const KEY_HIGH_CONTRAST: &str = "high-contrast";
pub const KEY_COOKIE_CONSENT: &str = "cookieConsent";
pub const KEY_THEME: &str = "theme";

/// Almacén clave/valor (ambos strings)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// None si el navegador bloquea localStorage (modo privado, iframes...)
    pub fn open() -> Option<Self> {
        let storage = window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        self.storage
            .get_item(key)
            .map_err(|_| format!("Error leyendo '{}' de localStorage", key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.storage
            .remove_item(key)
            .map_err(|_| format!("Error eliminando '{}' de localStorage", key))
    }
}

/// Almacén en memoria: respaldo sin localStorage y doble en tests
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage si está disponible; si no, memoria (se pierde al recargar)
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => {
            log::warn!("⚠️ [STORAGE] localStorage no disponible, las preferencias no se recordarán");
            Rc::new(MemoryStore::new())
        }
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando '{}': {}", key, e))?;
    store.set_item(key, &json)
}

pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, String> {
    match store.get_item(key)? {
        Some(json) => serde_json::from_str::<T>(&json)
            .map(Some)
            .map_err(|e| format!("Error deserializando '{}': {}", key, e)),
        None => Ok(None),
    }
}

pub fn load_bool(store: &dyn KeyValueStore, key: &str, default: bool) -> bool {
    match store.get_item(key) {
        Ok(Some(value)) => value == "true",
        Ok(None) => default,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {}", e);
            default
        }
    }
}

pub fn save_bool(store: &dyn KeyValueStore, key: &str, value: bool) {
    if let Err(e) = store.set_item(key, &value.to_string()) {
        log::warn!("⚠️ [STORAGE] {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pref {
        accepted: bool,
    }

    #[test]
    fn json_values_survive_the_store() {
        let store = MemoryStore::new();
        save_json(&store, KEY_COOKIE_CONSENT, &Pref { accepted: true }).unwrap();
        let loaded: Option<Pref> = load_json(&store, KEY_COOKIE_CONSENT).unwrap();
        assert_eq!(loaded, Some(Pref { accepted: true }));
    }

    #[test]
    fn corrupt_json_is_an_error_not_a_panic() {
        let store = MemoryStore::new();
        store.set_item(KEY_COOKIE_CONSENT, "{no es json").unwrap();
        let loaded: Result<Option<Pref>, String> = load_json(&store, KEY_COOKIE_CONSENT);
        assert!(loaded.unwrap_err().contains("cookieConsent"));
    }

    #[test]
    fn bools_are_stored_as_plain_strings() {
        let store = MemoryStore::new();
        assert!(!load_bool(&store, KEY_HIGH_CONTRAST, false));
        save_bool(&store, KEY_HIGH_CONTRAST, true);
        assert_eq!(store.get_item(KEY_HIGH_CONTRAST).unwrap().as_deref(), Some("true"));
        assert!(load_bool(&store, KEY_HIGH_CONTRAST, false));
    }
}
