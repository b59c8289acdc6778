use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub site_url: String,
    pub log_level: String,
    pub analytics: AnalyticsConfig,
    pub donation: DonationConfig,
    pub timing: TimingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_url: "https://montedelosolivos.es".to_string(),
            log_level: "info".to_string(),
            analytics: AnalyticsConfig::default(),
            donation: DonationConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

/// Analytics de terceros (solo se cargan tras aceptar cookies)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyticsConfig {
    /// ID de medición de Google Analytics; vacío = no se inyecta nada
    pub measurement_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationConfig {
    pub paypal_url: String,
    pub bizum_number: String,
    pub iban: String,
    pub beneficiary: String,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            paypal_url: "https://www.paypal.com/donate".to_string(),
            bizum_number: "600 000 000".to_string(),
            iban: "ES00 0000 0000 0000 0000 0000".to_string(),
            beneficiary: "Comunidad Monte de los Olivos".to_string(),
        }
    }
}

/// Retardos de la UI en milisegundos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub modal_show_delay_ms: u32,
    pub modal_hide_delay_ms: u32,
    pub verse_fade_ms: u32,
    pub cookie_banner_delay_ms: u32,
    pub form_submit_delay_ms: u32,
    pub notification_dismiss_ms: u32,
    pub loading_hide_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            modal_show_delay_ms: 10,
            modal_hide_delay_ms: 300,
            verse_fade_ms: 300,
            cookie_banner_delay_ms: 2000,
            form_submit_delay_ms: 1500,
            notification_dismiss_ms: 5000,
            loading_hide_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            site_url: option_env!("SITE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.site_url),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
            analytics: AnalyticsConfig {
                measurement_id: option_env!("GA_MEASUREMENT_ID").unwrap_or("").to_string(),
            },
            donation: DonationConfig {
                paypal_url: option_env!("PAYPAL_DONATION_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.donation.paypal_url),
                bizum_number: option_env!("BIZUM_NUMBER")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.donation.bizum_number),
                iban: option_env!("DONATION_IBAN")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.donation.iban),
                beneficiary: defaults.donation.beneficiary,
            },
            timing: TimingConfig {
                cookie_banner_delay_ms: option_env!("COOKIE_BANNER_DELAY_MS")
                    .unwrap_or("2000").parse().unwrap_or(2000),
                form_submit_delay_ms: option_env!("FORM_SUBMIT_DELAY_MS")
                    .unwrap_or("1500").parse().unwrap_or(1500),
                ..defaults.timing
            },
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// ¿Hay analytics configurado?
    pub fn has_analytics(&self) -> bool {
        !self.analytics.measurement_id.trim().is_empty()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_analytics() {
        let config = AppConfig::default();
        assert!(!config.has_analytics());
        assert_eq!(config.timing.cookie_banner_delay_ms, 2000);
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
