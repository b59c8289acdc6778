// ============================================================================
// MODAL VIEW - Nodo de modal reutilizable (galería, eventos, donaciones)
// ============================================================================
// El nodo se crea una vez y se cachea; el contenido se muta in situ.
// Foco y trampa de Tab los gestiona el AccessibilityManager al recibir
// ModalOpened / ModalClosed.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};
use crate::config::CONFIG;
use crate::dom::{
    add_class, append_child, body, get_element_by_id, on_click, query_all_in, remove_class, set_attribute,
    set_display, ElementBuilder,
};
use crate::state::{AppContext, AppEvent};
use crate::viewmodels::ModalLifecycle;

struct ModalInner {
    id: String,
    root: Element,
    body: Element,
    lifecycle: RefCell<ModalLifecycle>,
    ctx: AppContext,
}

/// Handle compartido de un modal; clonar no duplica el nodo
#[derive(Clone)]
pub struct Modal {
    inner: Rc<ModalInner>,
}

impl Modal {
    /// Crea el modal `#id` (o reutiliza el existente) y registra sus cierres:
    /// botón, click en el fondo y Escape.
    pub fn ensure(ctx: &AppContext, id: &str, extra_class: &str) -> Result<Self, JsValue> {
        let (root, modal_body) = match get_element_by_id(id) {
            Some(existing) => {
                let modal_body = match existing.query_selector(".modal-body")? {
                    Some(b) => b,
                    None => {
                        let b = ElementBuilder::new("div")?.class("modal-body").build();
                        append_child(&existing, &b)?;
                        b
                    }
                };
                (existing, modal_body)
            }
            None => Self::build_skeleton(id, extra_class)?,
        };

        let modal = Self {
            inner: Rc::new(ModalInner {
                id: id.to_string(),
                root,
                body: modal_body,
                lifecycle: RefCell::new(ModalLifecycle::new()),
                ctx: ctx.clone(),
            }),
        };
        modal.bind_close_triggers()?;
        Ok(modal)
    }

    fn build_skeleton(id: &str, extra_class: &str) -> Result<(Element, Element), JsValue> {
        let class = if extra_class.is_empty() {
            "modal".to_string()
        } else {
            format!("modal {}", extra_class)
        };
        let root = ElementBuilder::new("div")?
            .id(id)
            .class(&class)
            .attr("role", "dialog")?
            .attr("aria-modal", "true")?
            .attr("aria-hidden", "true")?
            .build();
        set_display(&root, "none")?;

        let content = ElementBuilder::new("div")?.class("modal-content").build();
        let close_btn = ElementBuilder::new("button")?
            .class("modal-close")
            .attr("type", "button")?
            .attr("aria-label", "Cerrar")?
            .text("×")
            .build();
        let modal_body = ElementBuilder::new("div")?.class("modal-body").build();

        append_child(&content, &close_btn)?;
        append_child(&content, &modal_body)?;
        append_child(&root, &content)?;

        let page = body().ok_or_else(|| JsValue::from_str("No body"))?;
        page.append_child(&root)?;
        Ok((root, modal_body))
    }

    fn bind_close_triggers(&self) -> Result<(), JsValue> {
        for button in query_all_in(&self.inner.root, ".modal-close, [data-close-modal]")? {
            let modal = self.clone();
            on_click(&button, move |_e: MouseEvent| modal.close())?;
        }

        // Fondo: solo cuando el target es el propio fondo
        {
            let modal = self.clone();
            let root = self.inner.root.clone();
            on_click(&self.inner.root, move |e: MouseEvent| {
                let on_backdrop = e
                    .target()
                    .and_then(|t| t.dyn_into::<Node>().ok())
                    .map(|node| root.is_same_node(Some(&node)))
                    .unwrap_or(false);
                if on_backdrop {
                    modal.close();
                }
            })?;
        }

        {
            let modal = self.clone();
            self.inner.ctx.bus.subscribe(move |event| {
                if *event == AppEvent::EscapePressed && modal.is_open() {
                    modal.close();
                }
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn root(&self) -> &Element {
        &self.inner.root
    }

    /// Contenedor donde cada componente inyecta su contenido
    pub fn body(&self) -> &Element {
        &self.inner.body
    }

    pub fn is_open(&self) -> bool {
        self.inner.lifecycle.borrow().is_shown()
    }

    /// CLOSED → OPENING (display) → OPEN (clase `active` tras el retardo)
    pub fn open(&self) {
        if !self.inner.lifecycle.borrow_mut().request_open() {
            return;
        }
        let inner = &self.inner;
        if let Err(e) = set_display(&inner.root, "flex")
            .and_then(|_| set_attribute(&inner.root, "aria-hidden", "false"))
        {
            log::warn!("⚠️ [MODAL] Error mostrando #{}: {:?}", inner.id, e);
        }
        if let Some(page) = body() {
            let _ = add_class(&page, "modal-open");
        }
        inner.ctx.state.set_open_modal(Some(inner.id.clone()));
        log::debug!("[MODAL] Abriendo #{}", inner.id);
        inner.ctx.bus.emit(AppEvent::ModalOpened {
            modal_id: inner.id.clone(),
        });

        let delayed = self.inner.clone();
        Timeout::new(CONFIG.timing.modal_show_delay_ms, move || {
            if delayed.lifecycle.borrow_mut().finish_open() {
                let _ = add_class(&delayed.root, "active");
            }
        })
        .forget();
    }

    /// OPEN → CLOSING (quita `active`) → CLOSED (display none tras la transición)
    pub fn close(&self) {
        if !self.inner.lifecycle.borrow_mut().request_close() {
            return;
        }
        let inner = &self.inner;
        let _ = remove_class(&inner.root, "active");
        let _ = set_attribute(&inner.root, "aria-hidden", "true");
        if let Some(page) = body() {
            let _ = remove_class(&page, "modal-open");
        }
        inner.ctx.state.set_open_modal(None);
        log::debug!("[MODAL] Cerrando #{}", inner.id);
        inner.ctx.bus.emit(AppEvent::ModalClosed {
            modal_id: inner.id.clone(),
        });

        let delayed = self.inner.clone();
        Timeout::new(CONFIG.timing.modal_hide_delay_ms, move || {
            if delayed.lifecycle.borrow_mut().finish_close() {
                let _ = set_display(&delayed.root, "none");
            }
        })
        .forget();
    }
}
