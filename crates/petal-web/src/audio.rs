use crate::constants::{
    AUDIO_BUTTON_SELECTOR, AUDIO_ICON_ID, AUDIO_ID, ICON_PAUSE_CLASS, ICON_PLAY_CLASS,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the background-music toggle: force looping on the audio element and
/// flip play/pause (swapping the button icon) on each control click.
///
/// Missing elements are tolerated; the page simply has no music then.
pub fn wire_audio_toggle(document: &web::Document) {
    let Some(audio) = document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    else {
        log::warn!("[audio] no #{} element; music disabled", AUDIO_ID);
        return;
    };
    audio.set_loop(true);

    let Ok(Some(button)) = document.query_selector(AUDIO_BUTTON_SELECTOR) else {
        log::warn!("[audio] no {} control; music disabled", AUDIO_BUTTON_SELECTOR);
        return;
    };

    let doc = document.clone();
    dom::add_click_listener(&button, move || {
        let icon = doc.get_element_by_id(AUDIO_ICON_ID);
        if audio.paused() {
            // play() returns a promise; resolution is irrelevant here
            let _ = audio.play();
            if let Some(icon) = &icon {
                let _ = icon.class_list().replace(ICON_PLAY_CLASS, ICON_PAUSE_CLASS);
            }
        } else {
            let _ = audio.pause();
            if let Some(icon) = &icon {
                let _ = icon.class_list().replace(ICON_PAUSE_CLASS, ICON_PLAY_CLASS);
            }
        }
    });
}
