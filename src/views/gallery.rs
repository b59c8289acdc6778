// ============================================================================
// GALLERY - Pestañas de la galería y modal de imagen
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, MouseEvent};
use crate::dom::{
    append_child, get_attribute, on_click, query_selector_all, set_attribute, set_class,
    ElementBuilder,
};
use crate::state::AppContext;
use crate::views::modal::Modal;

const IMAGE_MODAL_ID: &str = "image-modal";

/// Activa la pestaña `tab` y su panel; "todas" muestra todos los paneles
fn select_tab(ctx: &AppContext, tabs: &[Element], panels: &[Element], tab: &str) {
    ctx.state.set_gallery_tab(tab);
    for t in tabs {
        let selected = get_attribute(t, "data-tab").as_deref() == Some(tab);
        let _ = set_class(t, "active", selected);
        let _ = set_attribute(t, "aria-selected", if selected { "true" } else { "false" });
    }
    for panel in panels {
        let name = get_attribute(panel, "data-panel");
        let visible = tab == "todas" || name.as_deref() == Some(tab);
        let _ = set_class(panel, "active", visible);
    }
    log::debug!("[GALERIA] Pestaña '{}'", tab);
}

fn bind_tabs(ctx: &AppContext) -> Result<(), JsValue> {
    let tabs = query_selector_all(".gallery-tab[data-tab]")?;
    if tabs.is_empty() {
        return Ok(());
    }
    let panels = query_selector_all(".gallery-panel[data-panel]")?;

    for tab in &tabs {
        let Some(name) = get_attribute(tab, "data-tab") else {
            continue;
        };
        let ctx = ctx.clone();
        let all_tabs = tabs.clone();
        let all_panels = panels.clone();
        on_click(tab, move |_e: MouseEvent| select_tab(&ctx, &all_tabs, &all_panels, &name))?;
    }

    // Estado inicial: la pestaña marcada como activa en el HTML o la por defecto
    let initial = tabs
        .iter()
        .find(|t| t.class_list().contains("active"))
        .and_then(|t| get_attribute(t, "data-tab"))
        .unwrap_or_else(|| ctx.state.gallery_tab());
    select_tab(ctx, &tabs, &panels, &initial);
    Ok(())
}

/// Nodos fijos del modal de imagen, creados una vez
struct ImageModal {
    modal: Modal,
    image: HtmlImageElement,
    caption: Element,
}

impl ImageModal {
    fn new(ctx: &AppContext) -> Result<Self, JsValue> {
        let modal = Modal::ensure(ctx, IMAGE_MODAL_ID, "image-modal")?;
        let image = ElementBuilder::new("img")?
            .class("modal-image")
            .build()
            .dyn_into::<HtmlImageElement>()?;
        let caption = ElementBuilder::new("p").map(|b| b.class("modal-caption").build())?;
        append_child(modal.body(), &image)?;
        append_child(modal.body(), &caption)?;
        Ok(Self { modal, image, caption })
    }

    fn show(&self, source: &HtmlImageElement) {
        self.image.set_src(&source.src());
        self.image.set_alt(&source.alt());
        let caption = get_attribute(source, "data-caption").unwrap_or_else(|| source.alt());
        self.caption.set_text_content(Some(&caption));
        let _ = set_class(&self.caption, "hidden", caption.trim().is_empty());
        self.modal.open();
    }
}

fn bind_image_modal(ctx: &AppContext) -> Result<(), JsValue> {
    let images: Vec<HtmlImageElement> = query_selector_all(".gallery-item img")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();
    if images.is_empty() {
        return Ok(());
    }

    let viewer = std::rc::Rc::new(ImageModal::new(ctx)?);
    for image in images {
        let viewer = viewer.clone();
        let source = image.clone();
        on_click(&image, move |_e: MouseEvent| viewer.show(&source))?;
    }
    Ok(())
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    bind_tabs(ctx)?;
    bind_image_modal(ctx)?;
    Ok(())
}
