// ============================================================================
// FOCUS TRAP - Ciclo de Tab/Shift+Tab dentro de un contenedor
// ============================================================================

/// Selector de descendientes enfocables
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), \
input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Índice al que hay que mover el foco al pulsar Tab, o None para dejar
/// actuar al navegador.
///
/// - Tab sobre el último → primero
/// - Shift+Tab sobre el primero → último
/// - Foco fuera del contenedor → primero (o último con Shift)
pub fn trap_target(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_on_last_cycles_to_first() {
        assert_eq!(trap_target(Some(2), 3, false), Some(0));
    }

    #[test]
    fn shift_tab_on_first_cycles_to_last() {
        assert_eq!(trap_target(Some(0), 3, true), Some(2));
    }

    #[test]
    fn inner_moves_are_left_to_the_browser() {
        assert_eq!(trap_target(Some(0), 3, false), None);
        assert_eq!(trap_target(Some(1), 3, false), None);
        assert_eq!(trap_target(Some(1), 3, true), None);
        assert_eq!(trap_target(Some(2), 3, true), None);
    }

    #[test]
    fn focus_outside_is_pulled_back_in() {
        assert_eq!(trap_target(None, 3, false), Some(0));
        assert_eq!(trap_target(None, 3, true), Some(2));
    }

    #[test]
    fn tab_from_page_body_enters_the_modal() {
        // Clic en texto no enfocable del modal: activeElement pasa a <body>
        let current = None;
        assert_eq!(trap_target(current, 4, false), Some(0));
        assert_eq!(trap_target(current, 4, true), Some(3));
    }

    #[test]
    fn single_element_keeps_focus() {
        assert_eq!(trap_target(Some(0), 1, false), Some(0));
        assert_eq!(trap_target(Some(0), 1, true), Some(0));
    }

    #[test]
    fn empty_container_has_no_target() {
        assert_eq!(trap_target(None, 0, false), None);
    }
}
