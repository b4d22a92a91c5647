//! Navigation dots: highlight the dot for the section in view and
//! smooth-scroll on click.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::effects::nav::{dot_index_for, SECTION_IDS};

use super::dom;

const SECTION_THRESHOLD: f64 = 0.4;

pub fn install(document: &Document) {
    let dots = collect_dots(document);
    if dots.is_empty() {
        return;
    }

    wire_observer(document, dots.clone());
    wire_clicks(document, &dots);
}

fn collect_dots(document: &Document) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(".nav-dot") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .collect()
}

fn wire_observer(document: &Document, dots: Vec<Element>) {
    // Entries are handled in delivery order; when several sections pass the
    // threshold in one batch, the last entry wins.
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let Some(idx) = dot_index_for(&entry.target().id()) else {
                continue;
            };
            let Some(active) = dots.get(idx) else {
                continue;
            };
            for dot in &dots {
                let _ = dot.class_list().remove_1("active");
            }
            let _ = active.class_list().add_1("active");
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let Some(observer) = dom::intersection_observer(SECTION_THRESHOLD, &on_intersect) else {
        return;
    };
    for id in SECTION_IDS {
        if let Some(section) = document.get_element_by_id(id) {
            observer.observe(&section);
        }
    }
    on_intersect.forget();
}

fn wire_clicks(document: &Document, dots: &[Element]) {
    for (i, dot) in dots.iter().enumerate() {
        let Some(&section_id) = SECTION_IDS.get(i) else {
            break;
        };
        let doc = document.clone();
        let click = Closure::wrap(Box::new(move || {
            let Some(section) = doc.get_element_by_id(section_id) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }) as Box<dyn FnMut()>);
        let _ = dot.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}
