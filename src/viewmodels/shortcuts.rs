// ============================================================================
// SHORTCUTS - Atajos de teclado y preferencias de accesibilidad
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: cerrar modal o menú
    Dismiss,
    /// Alt+M
    ToggleMenu,
    /// Alt+C
    ToggleHighContrast,
    /// Alt+T
    ToggleTheme,
    /// Alt+↑
    ScrollToTop,
}

/// Traduce una pulsación a atajo. Escape se lee de `key`; las combinaciones
/// con Alt de `code` (tecla física), porque en macOS Alt+M produce "µ".
/// Mientras se escribe en un campo solo Escape cuenta.
pub fn resolve_shortcut(
    key: &str,
    code: &str,
    alt: bool,
    ctrl_or_meta: bool,
    typing: bool,
) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::Dismiss);
    }
    if typing || !alt || ctrl_or_meta {
        return None;
    }
    match code {
        "KeyM" => Some(Shortcut::ToggleMenu),
        "KeyC" => Some(Shortcut::ToggleHighContrast),
        "KeyT" => Some(Shortcut::ToggleTheme),
        "ArrowUp" => Some(Shortcut::ScrollToTop),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_always_dismisses() {
        assert_eq!(resolve_shortcut("Escape", "Escape", false, false, true), Some(Shortcut::Dismiss));
    }

    #[test]
    fn alt_combinations() {
        assert_eq!(resolve_shortcut("m", "KeyM", true, false, false), Some(Shortcut::ToggleMenu));
        assert_eq!(resolve_shortcut("C", "KeyC", true, false, false), Some(Shortcut::ToggleHighContrast));
        assert_eq!(resolve_shortcut("ArrowUp", "ArrowUp", true, false, false), Some(Shortcut::ScrollToTop));
        assert_eq!(resolve_shortcut("m", "KeyM", false, false, false), None);
        assert_eq!(resolve_shortcut("m", "KeyM", true, true, false), None);
    }

    #[test]
    fn mac_option_characters_use_the_physical_key() {
        assert_eq!(resolve_shortcut("µ", "KeyM", true, false, false), Some(Shortcut::ToggleMenu));
        assert_eq!(resolve_shortcut("ç", "KeyC", true, false, false), Some(Shortcut::ToggleHighContrast));
        assert_eq!(resolve_shortcut("†", "KeyT", true, false, false), Some(Shortcut::ToggleTheme));
    }

    #[test]
    fn typing_suppresses_shortcuts() {
        assert_eq!(resolve_shortcut("t", "KeyT", true, false, true), None);
    }

    #[test]
    fn theme_round_trip() {
        assert_eq!(Theme::parse(Some("dark")).toggled(), Theme::Light);
        assert_eq!(Theme::parse(None), Theme::Light);
        assert_eq!(Theme::parse(Some("sepia")).as_str(), "light");
    }
}
