use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;

// Start the reveal slightly before the element's edge reaches the viewport
// bottom, once a tenth of it is visible.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const THRESHOLD: f64 = 0.1;

/// Marks `.fade-in` elements `visible` the first time they intersect the
/// viewport, then stops watching them. Elements never scrolled into view
/// stay unrevealed; the class is never removed again.
pub fn wire_fade_ins(document: &Document) {
    let targets = dom::query_all(document, ".fade-in");
    if targets.is_empty() {
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&JsValue::from(THRESHOLD));

    if let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    {
        for target in &targets {
            observer.observe(target);
        }
        on_intersect.forget();
    }
}
