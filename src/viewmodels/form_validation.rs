// ============================================================================
// FORM VALIDATION - Reglas del formulario de contacto y newsletter
// ============================================================================

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    // Móvil español: prefijo opcional y 9 dígitos empezando por 6 o 7
    static ref PHONE_RE: Regex = Regex::new(r"^(\+34|0034|34)?[67]\d{8}$").unwrap();
}

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Espacios, guiones y puntos se ignoran
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .collect();
    PHONE_RE.is_match(&compact)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Topic,
    Message,
    Privacy,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Topic,
        ContactField::Message,
        ContactField::Privacy,
    ];

    /// `name` del control dentro de `#contact-form`
    pub fn input_name(&self) -> &'static str {
        match self {
            ContactField::Name => "nombre",
            ContactField::Email => "email",
            ContactField::Phone => "telefono",
            ContactField::Topic => "asunto",
            ContactField::Message => "mensaje",
            ContactField::Privacy => "privacidad",
        }
    }
}

/// Valores tal como se leen del formulario
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
    pub privacy_accepted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

/// Valida un único campo (también usado en `blur`)
pub fn validate_field(field: ContactField, form: &ContactForm) -> Option<&'static str> {
    match field {
        ContactField::Name => {
            let name = form.name.trim();
            if name.is_empty() {
                Some("El nombre es obligatorio")
            } else if name.chars().count() < MIN_NAME_LEN {
                Some("El nombre debe tener al menos 2 caracteres")
            } else {
                None
            }
        }
        ContactField::Email => {
            if form.email.trim().is_empty() {
                Some("El email es obligatorio")
            } else if !is_valid_email(&form.email) {
                Some("Introduce un email válido")
            } else {
                None
            }
        }
        ContactField::Phone => {
            if !form.phone.trim().is_empty() && !is_valid_phone(&form.phone) {
                Some("Introduce un teléfono móvil válido")
            } else {
                None
            }
        }
        ContactField::Topic => {
            if form.topic.trim().is_empty() {
                Some("Selecciona un asunto")
            } else {
                None
            }
        }
        ContactField::Message => {
            let message = form.message.trim();
            if message.is_empty() {
                Some("El mensaje es obligatorio")
            } else if message.chars().count() < MIN_MESSAGE_LEN {
                Some("El mensaje debe tener al menos 10 caracteres")
            } else {
                None
            }
        }
        ContactField::Privacy => {
            if form.privacy_accepted {
                None
            } else {
                Some("Debes aceptar la política de privacidad")
            }
        }
    }
}

/// Evalúa todos los campos, sin cortocircuito
pub fn validate_contact(form: &ContactForm) -> ValidationReport {
    let errors = ContactField::ALL
        .iter()
        .filter_map(|field| {
            validate_field(*field, form).map(|message| FieldError {
                field: *field,
                message,
            })
        })
        .collect();
    ValidationReport { errors }
}

pub fn validate_newsletter(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Introduce tu email")
    } else if !is_valid_email(email) {
        Some("Introduce un email válido")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "María".to_string(),
            email: "maria@example.com".to_string(),
            phone: String::new(),
            topic: "oracion".to_string(),
            message: "Quisiera pedir oración por mi familia".to_string(),
            privacy_accepted: true,
        }
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn phone_examples() {
        assert!(is_valid_phone("612345678"));
        assert!(is_valid_phone("712 345 678"));
        assert!(is_valid_phone("+34 612-345-678"));
        assert!(!is_valid_phone("512345678"));
        assert!(!is_valid_phone("61234567"));
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate_contact(&valid_form()).is_valid());
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        let mut form = valid_form();
        form.phone = "   ".to_string();
        assert!(validate_contact(&form).is_valid());
        form.phone = "912345678".to_string();
        let report = validate_contact(&form);
        assert!(report.error_for(ContactField::Phone).is_some());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let report = validate_contact(&ContactForm::default());
        let fields: Vec<ContactField> = report.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Topic,
                ContactField::Message,
                ContactField::Privacy,
            ]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn short_values_get_length_messages() {
        let mut form = valid_form();
        form.name = "J".to_string();
        form.message = "Hola".to_string();
        let report = validate_contact(&form);
        assert_eq!(
            report.error_for(ContactField::Name),
            Some("El nombre debe tener al menos 2 caracteres")
        );
        assert_eq!(
            report.error_for(ContactField::Message),
            Some("El mensaje debe tener al menos 10 caracteres")
        );
    }

    #[test]
    fn newsletter_only_checks_email() {
        assert_eq!(validate_newsletter("a@b.com"), None);
        assert_eq!(validate_newsletter(""), Some("Introduce tu email"));
        assert_eq!(validate_newsletter("a@b"), Some("Introduce un email válido"));
    }
}
