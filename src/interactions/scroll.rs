use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use super::dom;

/// Scroll offset past which the navbar switches to its "scrolled" look.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// How far above a section's top edge the highlighter starts counting it as
/// the current one.
const SECTION_LEAD_IN: f64 = 100.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Id of the section owning `scroll_y`, if any. Sections are
/// `(id, top, height)` in document order; each one claims the half-open
/// window `[top - lead-in, top - lead-in + height)`. When windows overlap,
/// the last section processed wins.
pub fn active_section(scroll_y: f64, sections: &[(String, f64, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, top, height) in sections {
        let lower = top - SECTION_LEAD_IN;
        if scroll_y >= lower && scroll_y < lower + height {
            current = Some(id.as_str());
        }
    }
    current
}

/// Intercepts clicks on in-page anchors and animates the jump, keeping the
/// target clear of the fixed navbar. Bare "#" anchors and dangling fragment
/// references fall through to default behavior.
pub fn wire_smooth_scroll(window: &Window, document: &Document) {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let window = window.clone();
        let document = document.clone();
        let click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let href = match e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                .and_then(|a| a.get_attribute("href"))
            {
                Some(href) => href,
                None => return,
            };
            if href == "#" || href.is_empty() {
                return;
            }
            if let Ok(Some(target)) = document.query_selector(&href) {
                e.prevent_default();

                let navbar_height = document
                    .get_element_by_id("navbar")
                    .and_then(|n| n.dyn_into::<HtmlElement>().ok())
                    .map(|n| n.offset_height() as f64)
                    .unwrap_or(0.0);
                let top = target.get_bounding_client_rect().top()
                    + window.page_y_offset().unwrap_or(0.0)
                    - navbar_height;

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = anchor.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}

/// Keeps the navbar link matching the section under the viewport marked
/// `active`. Recomputes from live layout on every scroll event; when no
/// section matches, the links are left as they are.
pub fn wire_active_links(window: &Window, document: &Document) {
    let window_handle = window.clone();
    let document = document.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = window_handle.page_y_offset().unwrap_or(0.0);
        let sections: Vec<(String, f64, f64)> = dom::query_all(&document, "section[id]")
            .into_iter()
            .map(|s| (s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect();

        if let Some(current) = active_section(scroll_y, &sections) {
            let target = format!("#{}", current);
            for link in dom::query_all(&document, ".navbar-nav a:not(.navbar-cta)") {
                let class_list = link.class_list();
                let _ = class_list.remove_1("active");
                if link.get_attribute("href").as_deref() == Some(target.as_str()) {
                    let _ = class_list.add_1("active");
                }
            }
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64, f64)> {
        vec![
            ("features".into(), 100.0, 100.0), // window [0, 100)
            ("pricing".into(), 200.0, 150.0),  // window [100, 250)
        ]
    }

    #[test]
    fn navbar_threshold_is_exclusive_at_fifty() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn section_under_the_scroll_position_wins() {
        let sections = sections();
        assert_eq!(active_section(50.0, &sections), Some("features"));
        assert_eq!(active_section(150.0, &sections), Some("pricing"));
    }

    #[test]
    fn positions_outside_every_window_match_nothing() {
        let sections = sections();
        assert_eq!(active_section(-10.0, &sections), None);
        assert_eq!(active_section(250.0, &sections), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn windows_are_half_open() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("features"));
        assert_eq!(active_section(100.0, &sections), Some("pricing"));
    }

    #[test]
    fn overlapping_windows_resolve_to_the_last_section() {
        let overlapping = vec![
            ("a".into(), 100.0, 200.0), // window [0, 200)
            ("b".into(), 150.0, 200.0), // window [50, 250)
        ];
        assert_eq!(active_section(60.0, &overlapping), Some("b"));
        assert_eq!(active_section(10.0, &overlapping), Some("a"));
    }
}
