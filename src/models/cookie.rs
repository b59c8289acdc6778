use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Respuesta del usuario al banner de cookies (`cookieConsent`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CookiePreference {
    pub accepted: bool,
    pub timestamp: DateTime<Utc>,
}
