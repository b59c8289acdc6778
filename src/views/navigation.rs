// ============================================================================
// NAVIGATION - Menú móvil, scroll suave y scroll-spy
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};
use crate::dom::{
    body, get_attribute, get_element_by_id, on_click, on_event, query_selector,
    query_selector_all, scroll_y, set_attribute, set_class, window,
};
use crate::state::{AppContext, AppEvent};
use crate::viewmodels::scroll::{anchor_scroll_top, header_scrolled};
use crate::viewmodels::scroll_spy::{resolve_active, SectionVisibility, SPY_ROOT_MARGIN, SPY_THRESHOLD};

const NAV_LINK_SELECTOR: &str = "#nav-menu a[href*='#'], .nav-link";

fn render_menu(open: bool) {
    if let Some(menu) = get_element_by_id("nav-menu") {
        let _ = set_class(&menu, "active", open);
    }
    if let Some(toggle) = get_element_by_id("menu-toggle") {
        let _ = set_class(&toggle, "active", open);
        let _ = set_attribute(&toggle, "aria-expanded", if open { "true" } else { "false" });
    }
    if let Some(page) = body() {
        let _ = set_class(&page, "menu-open", open);
    }
}

pub fn toggle_menu(ctx: &AppContext) {
    let open = ctx.state.toggle_menu();
    log::debug!("[NAV] Menú {}", if open { "abierto" } else { "cerrado" });
    render_menu(open);
}

pub fn close_menu(ctx: &AppContext) {
    if ctx.state.menu_open() {
        ctx.state.set_menu_open(false);
        render_menu(false);
    }
}

fn bind_menu(ctx: &AppContext) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (get_element_by_id("menu-toggle"), get_element_by_id("nav-menu")) else {
        log::debug!("[NAV] Sin #menu-toggle/#nav-menu, menú móvil desactivado");
        return Ok(());
    };

    {
        let ctx = ctx.clone();
        on_click(&toggle, move |_e: MouseEvent| toggle_menu(&ctx))?;
    }

    for link in crate::dom::query_all_in(&menu, "a")? {
        let ctx = ctx.clone();
        on_click(&link, move |_e: MouseEvent| close_menu(&ctx))?;
    }

    {
        let ctx = ctx.clone();
        let bus_ctx = ctx.clone();
        ctx.bus.subscribe(move |event| {
            if *event == AppEvent::EscapePressed {
                close_menu(&bus_ctx);
            }
        });
    }
    Ok(())
}

fn header_height() -> f64 {
    query_selector("header, .header")
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Scroll suave a un elemento descontando la cabecera fija
pub fn scroll_to_element(target: &Element) {
    let Some(win) = window() else {
        return;
    };
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), scroll_y(), header_height());
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn bind_smooth_scroll() -> Result<(), JsValue> {
    for anchor in query_selector_all("a[href^='#']")? {
        let Some(href) = get_attribute(&anchor, "href") else {
            continue;
        };
        if href == "#" {
            continue;
        }
        on_click(&anchor, move |e: MouseEvent| {
            if let Some(target) = get_element_by_id(href.trim_start_matches('#')) {
                e.prevent_default();
                scroll_to_element(&target);
            }
        })?;
    }
    Ok(())
}

fn bind_header_state() -> Result<(), JsValue> {
    let (Some(win), Ok(Some(header))) = (window(), query_selector("header, .header")) else {
        return Ok(());
    };
    let _ = set_class(&header, "scrolled", header_scrolled(scroll_y()));
    on_event(&win, "scroll", move |_e: Event| {
        let _ = set_class(&header, "scrolled", header_scrolled(scroll_y()));
    })
}

fn mark_active(links: &[Element], active_href: &str) {
    for link in links {
        let is_active = get_attribute(link, "href").as_deref() == Some(active_href);
        let _ = set_class(link, "active", is_active);
        if is_active {
            let _ = set_attribute(link, "aria-current", "true");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }
}

fn bind_scroll_spy() -> Result<(), JsValue> {
    let sections = query_selector_all("section[id]")?;
    let links = query_selector_all(NAV_LINK_SELECTOR)?;
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }
    let hrefs: Vec<String> = links
        .iter()
        .filter_map(|l| get_attribute(l, "href"))
        .collect();

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let batch: Vec<SectionVisibility> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| SectionVisibility {
                section_id: entry.target().id(),
                is_intersecting: entry.is_intersecting(),
            })
            .collect();
        if let Some(active) = resolve_active(&batch, &hrefs) {
            mark_active(&links, &active);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SPY_THRESHOLD));
    options.set_root_margin(SPY_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in &sections {
        observer.observe(section);
    }
    // Observer de toda la vida de la página
    callback.forget();
    log::info!("🧭 [NAV] Scroll-spy sobre {} secciones", sections.len());
    Ok(())
}

pub fn init(ctx: &AppContext) -> Result<(), JsValue> {
    bind_menu(ctx)?;
    bind_smooth_scroll()?;
    bind_header_state()?;
    bind_scroll_spy()?;
    Ok(())
}
