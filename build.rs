use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee `config::AppConfig::from_env` vía `option_env!`
const SITE_KEYS: [&str; 8] = [
    "SITE_URL",
    "LOG_LEVEL",
    "GA_MEASUREMENT_ID",
    "PAYPAL_DONATION_URL",
    "BIZUM_NUMBER",
    "DONATION_IBAN",
    "COOKIE_BANNER_DELAY_MS",
    "FORM_SUBMIT_DELAY_MS",
];

/// Retardos que deben ser milisegundos enteros
const NUMERIC_KEYS: [&str; 2] = ["COOKIE_BANNER_DELAY_MS", "FORM_SUBMIT_DELAY_MS"];

fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

fn main() {
    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
    for key in SITE_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let dotenv = read_dotenv(env_file);
    if dotenv.is_empty() {
        println!("cargo:warning=Sin .env: se usa la configuración por defecto del sitio");
    }

    for (key, value) in &dotenv {
        if !SITE_KEYS.contains(&key.as_str()) {
            println!("cargo:warning=.env: clave desconocida '{}', se ignora", key);
            continue;
        }
        if NUMERIC_KEYS.contains(&key.as_str()) && value.parse::<u32>().is_err() {
            println!("cargo:warning=.env: {}='{}' no es un número de milisegundos", key, value);
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
