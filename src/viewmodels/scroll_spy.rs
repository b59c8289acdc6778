// ============================================================================
// SCROLL SPY - Sección visible → enlace de navegación activo
// ============================================================================

pub const SPY_THRESHOLD: f64 = 0.3;
pub const SPY_ROOT_MARGIN: &str = "-80px 0px -40% 0px";

/// Entrada del IntersectionObserver reducida a lo que importa
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisibility {
    pub section_id: String,
    pub is_intersecting: bool,
}

/// Enlace que corresponde a una sección (`href="#id"`)
pub fn link_for_section<'a>(section_id: &str, hrefs: &'a [String]) -> Option<&'a str> {
    let target = format!("#{}", section_id);
    hrefs
        .iter()
        .map(String::as_str)
        .find(|href| *href == target || href.ends_with(&target))
}

/// Enlace activo tras procesar un lote del observer, en orden: gana el último
/// que intersecta y tiene enlace. None = no tocar el estado actual.
pub fn resolve_active(entries: &[SectionVisibility], hrefs: &[String]) -> Option<String> {
    entries
        .iter()
        .filter(|e| e.is_intersecting)
        .filter_map(|e| link_for_section(&e.section_id, hrefs))
        .last()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs() -> Vec<String> {
        ["#inicio", "#nosotros", "/index.html#eventos", "#contacto"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn entry(id: &str, visible: bool) -> SectionVisibility {
        SectionVisibility {
            section_id: id.to_string(),
            is_intersecting: visible,
        }
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let entries = [entry("inicio", true), entry("nosotros", true), entry("contacto", false)];
        assert_eq!(resolve_active(&entries, &hrefs()).as_deref(), Some("#nosotros"));
    }

    #[test]
    fn nothing_intersecting_keeps_current() {
        let entries = [entry("inicio", false)];
        assert_eq!(resolve_active(&entries, &hrefs()), None);
    }

    #[test]
    fn sections_without_link_are_skipped() {
        let entries = [entry("contacto", true), entry("galeria", true)];
        assert_eq!(resolve_active(&entries, &hrefs()).as_deref(), Some("#contacto"));
    }

    #[test]
    fn absolute_hrefs_match_by_fragment() {
        assert_eq!(link_for_section("eventos", &hrefs()), Some("/index.html#eventos"));
    }
}
