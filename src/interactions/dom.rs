use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// All elements matching `selector`, skipping nodes that are not HTML
/// elements. An invalid selector yields an empty list.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut found = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(element) = node.dyn_into::<HtmlElement>() {
                    found.push(element);
                }
            }
        }
    }
    found
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
