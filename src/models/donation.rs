use serde::{Deserialize, Serialize};

/// Método de donación detectado a partir del texto de la tarjeta
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationMethod {
    Bizum,
    PayPal,
    Transferencia,
    Unknown,
}

impl DonationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationMethod::Bizum => "bizum",
            DonationMethod::PayPal => "paypal",
            DonationMethod::Transferencia => "transferencia",
            DonationMethod::Unknown => "unknown",
        }
    }
}
