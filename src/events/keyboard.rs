use super::keys::{key_action, KeyAction};
use crate::constants::MARKER_ROOT_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    if ev.repeat() {
        return;
    }
    match key_action(&ev.key()) {
        Some(KeyAction::ToggleOverlay) => {
            crate::overlay::toggle(document);
            ev.prevent_default();
        }
        Some(KeyAction::ToggleMarkers) => {
            if let Some(visible) = crate::dom::toggle_visible(document, MARKER_ROOT_ID) {
                log::info!("[keys] markers visible={}", visible);
            }
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &doc);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
