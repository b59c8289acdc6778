use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ANONYMOUS_NAME: &str = "Anónimo";
pub const MIN_TESTIMONIAL_LEN: usize = 10;

/// Testimonio (o comentario) enviado desde los formularios del sitio
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

impl Testimonial {
    /// Crea un testimonio; el nombre vacío pasa a "Anónimo"
    pub fn new(name: &str, text: &str, submitted_at: DateTime<Utc>) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                ANONYMOUS_NAME.to_string()
            } else {
                name.to_string()
            },
            text: text.trim().to_string(),
            submitted_at,
        }
    }
}
