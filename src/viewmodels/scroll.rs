// ============================================================================
// SCROLL - Umbrales y cálculos de desplazamiento
// ============================================================================

pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

/// `data-speed` del elemento; valores ausentes o no numéricos → 0.5
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({:.1}px)", scroll_y * speed)
}

/// Destino del scroll suave a un ancla, descontando la cabecera fija
pub fn anchor_scroll_top(element_top_in_viewport: f64, scroll_y: f64, header_height: f64) -> f64 {
    (element_top_in_viewport + scroll_y - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_button_threshold() {
        assert!(!show_scroll_top(300.0));
        assert!(show_scroll_top(301.0));
        assert!(header_scrolled(51.0));
        assert!(!header_scrolled(0.0));
    }

    #[test]
    fn parallax_speed_defaults() {
        assert_eq!(parse_speed(None), 0.5);
        assert_eq!(parse_speed(Some("abc")), 0.5);
        assert_eq!(parse_speed(Some(" 0.25 ")), 0.25);
        assert_eq!(parallax_transform(200.0, 0.25), "translateY(50.0px)");
    }

    #[test]
    fn anchor_offset_never_negative() {
        assert_eq!(anchor_scroll_top(400.0, 100.0, 80.0), 420.0);
        assert_eq!(anchor_scroll_top(10.0, 0.0, 80.0), 0.0);
    }
}
