// ============================================================================
// MODAL LIFECYCLE - Máquina de estados compartida por todos los modales
// ============================================================================
// CLOSED → OPENING → OPEN → CLOSING → CLOSED
// Las transiciones inválidas no hacen nada y devuelven false.
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    /// Contenido inyectado y display aplicado, esperando la transición
    Opening,
    /// Clase visible aplicada
    Open,
    /// Clase visible retirada, esperando para ocultar
    Closing,
}

#[derive(Clone, Debug)]
pub struct ModalLifecycle {
    phase: ModalPhase,
}

impl ModalLifecycle {
    pub fn new() -> Self {
        Self { phase: ModalPhase::Closed }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Visible o en camino de serlo
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// Abrir: desde CLOSED, o desde CLOSING (reapertura antes de ocultar)
    pub fn request_open(&mut self) -> bool {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                self.phase = ModalPhase::Opening;
                true
            }
            _ => false,
        }
    }

    pub fn finish_open(&mut self) -> bool {
        if self.phase == ModalPhase::Opening {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    pub fn request_close(&mut self) -> bool {
        if self.is_shown() {
            self.phase = ModalPhase::Closing;
            true
        } else {
            false
        }
    }

    /// Un timer de cierre obsoleto (el modal se reabrió) no oculta nada
    pub fn finish_close(&mut self) -> bool {
        if self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Closed;
            true
        } else {
            false
        }
    }
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut modal = ModalLifecycle::new();
        assert!(modal.request_open());
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert!(modal.finish_open());
        assert!(modal.is_shown());
        assert!(modal.request_close());
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(modal.finish_close());
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let mut modal = ModalLifecycle::new();
        assert!(!modal.request_close());
        assert!(!modal.finish_close());
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn double_open_is_ignored() {
        let mut modal = ModalLifecycle::new();
        assert!(modal.request_open());
        assert!(!modal.request_open());
        assert!(modal.finish_open());
        assert!(!modal.finish_open());
    }

    #[test]
    fn stale_hide_timer_after_reopen_does_nothing() {
        let mut modal = ModalLifecycle::new();
        modal.request_open();
        modal.finish_open();
        modal.request_close();
        // reabierto antes de que venza el timer de ocultar
        assert!(modal.request_open());
        assert!(!modal.finish_close());
        assert!(modal.finish_open());
        assert_eq!(modal.phase(), ModalPhase::Open);
    }
}
