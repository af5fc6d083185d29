use crate::constants::STATUS_OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the stylesheet
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) else {
        return false;
    };
    el.class_list().contains("hidden")
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Replace the status line, e.g. whether hand tracking is available.
pub fn set_status(document: &web::Document, text: &str) {
    let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) else {
        return;
    };
    let line = match el.query_selector(".status-text").ok().flatten() {
        Some(line) => line,
        None => el,
    };
    line.set_text_content(Some(text));
}
