//! Scroll-triggered reveal: timeline entries and achievement cards fade in
//! the first time they reach the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserverEntry};

use super::dom;

const REVEAL_TARGETS: &str = ".timeline-item, .achieve-card";
const VISIBILITY_THRESHOLD: f64 = 0.15;

pub fn install(document: &Document) {
    let Ok(targets) = document.query_selector_all(REVEAL_TARGETS) else {
        return;
    };

    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                // The class is persistent; re-entering the viewport is a
                // no-op because DomTokenList::add deduplicates.
                let _ = entry.target().class_list().add_1("visible");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let Some(observer) = dom::intersection_observer(VISIBILITY_THRESHOLD, &on_intersect) else {
        return;
    };
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
    on_intersect.forget();
}
