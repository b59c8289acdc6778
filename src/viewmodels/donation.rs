// ============================================================================
// DONATION - Detección del método y contenido del modal de donación
// ============================================================================

use crate::config::DonationConfig;
use crate::models::donation::DonationMethod;
use crate::state::{EventBus, NotificationKind};

pub const UNKNOWN_METHOD_MESSAGE: &str = "Método de donación no disponible. Inténtalo de nuevo o contáctanos.";

/// Detecta el método por palabras clave del título de la tarjeta
pub fn detect_method(card_title: &str) -> DonationMethod {
    let title = card_title.to_lowercase();
    if title.contains("bizum") {
        DonationMethod::Bizum
    } else if title.contains("paypal") {
        DonationMethod::PayPal
    } else if ["transferencia", "banco", "bancaria", "iban"]
        .iter()
        .any(|k| title.contains(k))
    {
        DonationMethod::Transferencia
    } else {
        DonationMethod::Unknown
    }
}

/// Como `detect_method`, notificando el error cuando no se reconoce
pub fn resolve_method(card_title: &str, bus: &EventBus) -> DonationMethod {
    let method = detect_method(card_title);
    if method == DonationMethod::Unknown {
        log::warn!("⚠️ [DONACION] Método no reconocido: '{}'", card_title.trim());
        bus.notify(UNKNOWN_METHOD_MESSAGE, NotificationKind::Error);
    }
    method
}

/// Contenido del modal para un método
#[derive(Clone, Debug, PartialEq)]
pub struct DonationInfo {
    pub title: String,
    pub description: String,
    /// Pares etiqueta/valor mostrados en el cuerpo
    pub details: Vec<(String, String)>,
    /// Valor que copia el botón "Copiar"
    pub copy_value: Option<String>,
    /// Enlace externo (se abre en una pestaña nueva)
    pub external_url: Option<String>,
}

pub fn donation_info(method: DonationMethod, config: &DonationConfig) -> Option<DonationInfo> {
    match method {
        DonationMethod::Bizum => Some(DonationInfo {
            title: "Donar con Bizum".to_string(),
            description: "Envía tu donativo desde la app de tu banco con Bizum.".to_string(),
            details: vec![
                ("Número".to_string(), config.bizum_number.clone()),
                ("Concepto".to_string(), "Donativo".to_string()),
            ],
            copy_value: Some(config.bizum_number.clone()),
            external_url: None,
        }),
        DonationMethod::PayPal => Some(DonationInfo {
            title: "Donar con PayPal".to_string(),
            description: "Serás redirigido a PayPal para completar tu donativo de forma segura.".to_string(),
            details: Vec::new(),
            copy_value: None,
            external_url: Some(config.paypal_url.clone()),
        }),
        DonationMethod::Transferencia => Some(DonationInfo {
            title: "Transferencia bancaria".to_string(),
            description: "Puedes realizar una transferencia a la cuenta de la comunidad.".to_string(),
            details: vec![
                ("Beneficiario".to_string(), config.beneficiary.clone()),
                ("IBAN".to_string(), config.iban.clone()),
                ("Concepto".to_string(), "Donativo".to_string()),
            ],
            copy_value: Some(config.iban.clone()),
            external_url: None,
        }),
        DonationMethod::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::state::AppEvent;

    #[test]
    fn bizum_card_title() {
        assert_eq!(detect_method("Bizum — dona ahora"), DonationMethod::Bizum);
        assert_eq!(detect_method("Bizum — dona ahora").as_str(), "bizum");
    }

    #[test]
    fn other_known_titles() {
        assert_eq!(detect_method("Donar vía PayPal"), DonationMethod::PayPal);
        assert_eq!(detect_method("Transferencia Bancaria"), DonationMethod::Transferencia);
        assert_eq!(detect_method("Ingreso en BANCO"), DonationMethod::Transferencia);
    }

    #[test]
    fn unknown_title_notifies_error() {
        let bus = EventBus::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            bus.subscribe(move |event| events.borrow_mut().push(event.clone()));
        }
        let method = resolve_method("Ofrenda en especie", &bus);
        assert_eq!(method, DonationMethod::Unknown);
        assert_eq!(method.as_str(), "unknown");
        assert_eq!(
            *events.borrow(),
            vec![AppEvent::Notify {
                message: UNKNOWN_METHOD_MESSAGE.to_string(),
                kind: NotificationKind::Error,
            }]
        );
    }

    #[test]
    fn known_method_does_not_notify() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = hits.clone();
            bus.subscribe(move |_| *hits.borrow_mut() += 1);
        }
        resolve_method("PayPal", &bus);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn info_per_method() {
        let config = DonationConfig::default();
        let bizum = donation_info(DonationMethod::Bizum, &config).unwrap();
        assert_eq!(bizum.copy_value.as_deref(), Some(config.bizum_number.as_str()));
        let paypal = donation_info(DonationMethod::PayPal, &config).unwrap();
        assert_eq!(paypal.external_url.as_deref(), Some(config.paypal_url.as_str()));
        assert!(paypal.details.is_empty());
        assert!(donation_info(DonationMethod::Unknown, &config).is_none());
    }
}
