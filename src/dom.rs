use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

pub fn add_click_listener(document: &web::Document, id: &str, mut f: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(id) else {
        log::debug!("[dom] no #{} to wire", id);
        return;
    };
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listen for a named event on any target for the lifetime of the page.
pub fn add_event_listener(target: &web::EventTarget, event: &str, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Flip an element's A-Frame `visible` attribute. Returns the new visibility.
pub fn toggle_visible(document: &web::Document, id: &str) -> Option<bool> {
    let el = document.get_element_by_id(id)?;
    let visible = el.get_attribute("visible").as_deref() == Some("false");
    _ = el.set_attribute("visible", if visible { "true" } else { "false" });
    Some(visible)
}
