use crate::constants::{REVEAL_CLASS, REVEAL_SELECTOR, REVEAL_VIEWPORT_FRACTION};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-triggered reveals: once an element's top edge crosses the lower
/// part of the viewport it gets the visible class (CSS handles the actual
/// fade/slide transition). Classes are only ever added, so elements stay
/// revealed when scrolling back up.
pub fn wire_scroll_reveals(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    log::info!("[reveal] tracking {} elements", elements.len());

    // Run once up front so above-the-fold content is visible immediately.
    reveal_pass(&elements);

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        reveal_pass(&elements);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn reveal_pass(elements: &[web::HtmlElement]) {
    let (_, viewport_height) = dom::window_inner_size();
    let threshold = viewport_height * REVEAL_VIEWPORT_FRACTION;
    for el in elements {
        if el.class_list().contains(REVEAL_CLASS) {
            continue;
        }
        if el.get_bounding_client_rect().top() < threshold {
            let _ = el.class_list().add_1(REVEAL_CLASS);
        }
    }
}
