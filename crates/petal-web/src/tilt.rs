use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_SCALE, TILT_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 3D hover tilt for the glass cards: the card rotates toward the pointer,
/// capped at a few degrees, and snaps back flat on mouseleave.
pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, TILT_SELECTOR) {
        wire_one_card(card);
    }
}

fn wire_one_card(card: web::HtmlElement) {
    {
        let card_move = card.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = card_move.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let center_x = rect.width() / 2.0;
            let center_y = rect.height() / 2.0;
            if center_x <= 0.0 || center_y <= 0.0 {
                return;
            }
            let rotate_x = ((y - center_y) / center_y) * -TILT_MAX_DEG;
            let rotate_y = ((x - center_x) / center_x) * TILT_MAX_DEG;
            let transform = format!(
                "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale({TILT_SCALE})"
            );
            let _ = card_move.style().set_property("transform", &transform);
        }) as Box<dyn FnMut(_)>);
        let _ =
            card.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let card_leave = card.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let _ = card_leave.style().set_property(
                "transform",
                "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)",
            );
        }) as Box<dyn FnMut(_)>);
        let _ =
            card.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
