use serde::{Deserialize, Serialize};

/// Evento del calendario de la comunidad (leído de los `data-*` de `.event-card`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    /// Fecha ISO `YYYY-MM-DD`
    pub date: String,
    /// Hora `HH:MM`; sin hora = evento de día completo
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}
