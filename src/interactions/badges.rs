use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use super::dom;
use crate::config;

const STORE_LINK_PENDING: &str =
    "App store link coming soon! The app is currently in development.";

const QR_PLACEHOLDER_HELP: &str = "QR Code placeholder - Replace this with your actual QR code image by:\n\n1. Save your QR code as \"qr-code.png\" in the images folder\n2. Replace the placeholder div with an <img> tag\n\nSee the HTML comments for exact instructions.";

/// A badge pointing at the unresolved placeholder destination has nowhere
/// to navigate to yet. A missing href is not a placeholder.
pub fn is_placeholder_link(href: Option<&str>) -> bool {
    href == Some(config::PLACEHOLDER_HREF)
}

/// Logs every store-badge click; badges without a live listing swallow the
/// navigation and explain themselves instead.
pub fn wire_store_badges(document: &Document) {
    for badge in dom::query_all(document, ".store-badge") {
        let badge_ref = badge.clone();
        let click = Closure::wrap(Box::new(move |e: MouseEvent| {
            if let Ok(Some(label)) = badge_ref.query_selector(".store-badge-text span") {
                if let Some(name) = label.text_content() {
                    info!("Store badge clicked: {}", name);
                }
            }

            if is_placeholder_link(badge_ref.get_attribute("href").as_deref()) {
                e.prevent_default();
                dom::alert(STORE_LINK_PENDING);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = badge.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}

/// The QR slots are never wired to anything real in this build; clicking
/// one explains how to swap in the actual image.
pub fn wire_qr_placeholders(document: &Document) {
    for placeholder in dom::query_all(document, ".qr-code-placeholder, .qr-placeholder") {
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            dom::alert(QR_PLACEHOLDER_HELP);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ =
            placeholder.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_fragment_href_is_a_placeholder() {
        assert!(is_placeholder_link(Some("#")));
    }

    #[test]
    fn real_links_and_missing_hrefs_navigate_normally() {
        assert!(!is_placeholder_link(Some(
            "https://apps.apple.com/app/clientist"
        )));
        assert!(!is_placeholder_link(Some("#download")));
        assert!(!is_placeholder_link(None));
    }
}
