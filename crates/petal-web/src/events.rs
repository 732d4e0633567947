use crate::dom;
use petal_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe the field to pointer movement, clicks, and window resize.
/// All handlers are fire-and-forget closures over the shared field; the
/// browser event loop serializes them against the frame callback.
pub fn wire_field_handlers(
    field: Rc<RefCell<ParticleField>>,
    canvas: web::HtmlCanvasElement,
) {
    wire_pointer_move(field.clone());
    wire_click(field.clone());
    wire_resize(field, canvas);
}

fn wire_pointer_move(field: Rc<RefCell<ParticleField>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        field
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(field: Rc<RefCell<ParticleField>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        field
            .borrow_mut()
            .on_click(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(field: Rc<RefCell<ParticleField>>, canvas: web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (width, height) = dom::sync_canvas_to_window(&canvas);
        field.borrow_mut().on_resize(width, height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
