#![cfg(target_arch = "wasm32")]
use petal_core::{ParticleField, AMBIENT_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod reveal;
mod tilt;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("petal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // The drawing surface must exist before the renderer starts; a missing
    // canvas is a fatal startup condition, not a runtime error.
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_to_window(&canvas);
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        AMBIENT_COUNT,
        seed,
    )));

    events::wire_field_handlers(field.clone(), canvas.clone());
    reveal::wire_scroll_reveals(&document);
    tilt::wire_card_tilt(&document);
    audio::wire_audio_toggle(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface: render::CanvasSurface::new(ctx),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
