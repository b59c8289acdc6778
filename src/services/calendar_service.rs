// ============================================================================
// CALENDAR SERVICE - URL de "añadir a Google Calendar"
// ============================================================================

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;
use crate::models::calendar_event::CalendarEvent;

const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
const DEFAULT_EVENT_HOURS: i64 = 2;

/// Rango `dates` de Google Calendar.
/// Con hora: `YYYYMMDDTHHMMSS/YYYYMMDDTHHMMSS` (2 h); sin hora: día completo.
pub fn calendar_dates(event: &CalendarEvent) -> Result<String, String> {
    let date = NaiveDate::parse_from_str(event.date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Fecha inválida '{}': {}", event.date, e))?;

    match event.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(time) => {
            let time = NaiveTime::parse_from_str(time, "%H:%M")
                .map_err(|e| format!("Hora inválida '{}': {}", time, e))?;
            let start = NaiveDateTime::new(date, time);
            let end = start + Duration::hours(DEFAULT_EVENT_HOURS);
            Ok(format!(
                "{}/{}",
                start.format("%Y%m%dT%H%M%S"),
                end.format("%Y%m%dT%H%M%S")
            ))
        }
        None => {
            let next = date.succ_opt().ok_or("Fecha fuera de rango")?;
            Ok(format!("{}/{}", date.format("%Y%m%d"), next.format("%Y%m%d")))
        }
    }
}

/// Parámetros de la URL en orden; los campos opcionales vacíos se omiten
pub fn calendar_query_pairs(event: &CalendarEvent) -> Result<Vec<(&'static str, String)>, String> {
    let mut pairs = vec![
        ("action", "TEMPLATE".to_string()),
        ("text", event.title.trim().to_string()),
        ("dates", calendar_dates(event)?),
    ];
    if let Some(details) = event.description.as_deref().filter(|d| !d.trim().is_empty()) {
        pairs.push(("details", details.trim().to_string()));
    }
    if let Some(location) = event.location.as_deref().filter(|l| !l.trim().is_empty()) {
        pairs.push(("location", location.trim().to_string()));
    }
    Ok(pairs)
}

/// URL completa, codificada con URLSearchParams del navegador
pub fn google_calendar_url(event: &CalendarEvent) -> Result<String, JsValue> {
    let pairs = calendar_query_pairs(event).map_err(|e| JsValue::from_str(&e))?;
    let params = UrlSearchParams::new()?;
    for (key, value) in &pairs {
        params.append(key, value);
    }
    Ok(format!("{}?{}", GOOGLE_CALENDAR_BASE, String::from(params.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(time: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            title: "Culto de oración".to_string(),
            date: "2026-10-18".to_string(),
            time: time.map(str::to_string),
            location: Some("Calle Olivo 12, Madrid".to_string()),
            description: None,
        }
    }

    #[test]
    fn timed_events_last_two_hours() {
        let dates = calendar_dates(&event(Some("19:30"))).unwrap();
        assert_eq!(dates, "20261018T193000/20261018T213000");
    }

    #[test]
    fn events_without_time_span_the_whole_day() {
        let dates = calendar_dates(&event(None)).unwrap();
        assert_eq!(dates, "20261018/20261019");
    }

    #[test]
    fn late_events_roll_into_next_day() {
        let dates = calendar_dates(&event(Some("23:00"))).unwrap();
        assert_eq!(dates, "20261018T230000/20261019T010000");
    }

    #[test]
    fn missing_description_is_omitted_from_query() {
        let pairs = calendar_query_pairs(&event(Some("10:00"))).unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["action", "text", "dates", "location"]);
    }

    #[test]
    fn malformed_date_is_reported() {
        let mut bad = event(None);
        bad.date = "18/10/2026".to_string();
        assert!(calendar_dates(&bad).is_err());
    }
}
