// ============================================================================
// SCROLL MANAGER - Botón "volver arriba", reveal on scroll y parallax
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};
use crate::dom::{add_class, get_attribute, get_element_by_id, on_click, on_event, query_selector_all, scroll_y, set_class, window};
use crate::viewmodels::scroll::{parallax_transform, parse_speed, show_scroll_top, REVEAL_THRESHOLD};

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn update_parallax(items: &[(HtmlElement, f64)], y: f64) {
    for (element, speed) in items {
        let _ = element
            .style()
            .set_property("transform", &parallax_transform(y, *speed));
    }
}

fn bind_scroll(button: Option<Element>, parallax: Vec<(HtmlElement, f64)>) -> Result<(), JsValue> {
    if button.is_none() && parallax.is_empty() {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

    let on_scroll = move || {
        let y = scroll_y();
        if let Some(button) = &button {
            let _ = set_class(button, "visible", show_scroll_top(y));
        }
        update_parallax(&parallax, y);
    };
    on_scroll();
    on_event(&win, "scroll", move |_e: Event| on_scroll())
}

/// `.reveal` recibe `revealed` la primera vez que entra en pantalla
fn bind_reveal() -> Result<(), JsValue> {
    let targets = query_selector_all(".reveal")?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = add_class(&target, "revealed");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

pub fn init() -> Result<(), JsValue> {
    let button = get_element_by_id("scroll-top");
    if let Some(button) = &button {
        on_click(button, |_e: MouseEvent| scroll_to_top())?;
    }

    let parallax: Vec<(HtmlElement, f64)> = query_selector_all(".parallax")?
        .into_iter()
        .map(|el| {
            let speed = parse_speed(get_attribute(&el, "data-speed").as_deref());
            (el, speed)
        })
        .filter_map(|(el, speed)| el.dyn_into::<HtmlElement>().ok().map(|h| (h, speed)))
        .collect();

    bind_scroll(button, parallax)?;
    bind_reveal()?;
    Ok(())
}
