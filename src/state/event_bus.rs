// ============================================================================
// EVENT BUS - Eventos tipados entre componentes
// ============================================================================
// Los componentes no se conocen entre sí: publican y escuchan AppEvent.
// Los handlers se ejecutan en orden de registro, hasta completarse.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Un modal terminó de inyectar contenido y se está mostrando
    ModalOpened { modal_id: String },
    /// Un modal empezó a cerrarse
    ModalClosed { modal_id: String },
    /// Tecla Escape a nivel de documento
    EscapePressed,
    /// Mensaje para el banner de notificaciones
    Notify { message: String, kind: NotificationKind },
}

type Handler = Rc<dyn Fn(&AppEvent)>;

/// Bus de eventos compartido (clonar comparte los mismos subscribers)
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Rc<RefCell<Vec<Handler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a todos los eventos
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&AppEvent) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(handler));
    }

    /// Publicar evento
    pub fn emit(&self, event: AppEvent) {
        // Copia de la lista: un handler puede suscribir o emitir sin conflicto de borrow
        let handlers: Vec<Handler> = self.subscribers.borrow().iter().cloned().collect();
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.emit(AppEvent::Notify {
            message: message.into(),
            kind,
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            bus.subscribe(move |_| log.borrow_mut().push(tag));
        }
        bus.emit(AppEvent::EscapePressed);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clones_share_subscribers() {
        let bus = EventBus::new();
        let other = bus.clone();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = hits.clone();
            other.subscribe(move |event| {
                if matches!(event, AppEvent::ModalOpened { .. }) {
                    *hits.borrow_mut() += 1;
                }
            });
        }
        bus.emit(AppEvent::ModalOpened { modal_id: "image-modal".into() });
        bus.emit(AppEvent::EscapePressed);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn handler_may_emit_while_dispatching() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let inner = bus.clone();
            bus.subscribe(move |event| {
                if *event == AppEvent::EscapePressed {
                    inner.notify("cerrado", NotificationKind::Info);
                }
            });
        }
        {
            let seen = seen.clone();
            bus.subscribe(move |event| seen.borrow_mut().push(event.clone()));
        }
        bus.emit(AppEvent::EscapePressed);
        assert_eq!(seen.borrow().len(), 2);
    }
}
