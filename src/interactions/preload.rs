use web_sys::{Document, HtmlImageElement};

use super::dom;

/// Warms the browser cache for hero images whose real source is applied
/// later. Fire-and-forget; nothing waits on the fetches and no order is
/// guaranteed.
pub fn wire_hero_preload(document: &Document) {
    for img in dom::query_all(document, ".hero img") {
        if let Some(src) = img.get_attribute("data-src") {
            if let Ok(preload) = HtmlImageElement::new() {
                preload.set_src(&src);
            }
        }
    }
}
