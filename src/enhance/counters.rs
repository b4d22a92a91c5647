//! Stat counters: once the stats block scrolls into view, every
//! `[data-count]` element counts up from zero on its own interval timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use crate::effects::counter::{Counter, TICK_MS};

use super::dom;

const STATS_CONTAINER: &str = ".about-stats";
const VISIBILITY_THRESHOLD: f64 = 0.3;

pub fn install(document: &Document) {
    let Some(stats) = document.query_selector(STATS_CONTAINER).ok().flatten() else {
        return;
    };

    // The observer disconnects itself after the first hit, so the counters
    // run at most once per page load.
    let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
    let slot = observer_slot.clone();
    let doc = document.clone();
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let hit = entries.iter().any(|entry| {
            entry
                .unchecked_into::<IntersectionObserverEntry>()
                .is_intersecting()
        });
        if !hit {
            return;
        }
        start_counters(&doc);
        if let Some(observer) = slot.borrow_mut().take() {
            observer.disconnect();
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let Some(observer) = dom::intersection_observer(VISIBILITY_THRESHOLD, &on_intersect) else {
        return;
    };
    observer.observe(&stats);
    *observer_slot.borrow_mut() = Some(observer);
    on_intersect.forget();
}

fn start_counters(document: &Document) {
    let Ok(elements) = document.query_selector_all("[data-count]") else {
        return;
    };

    for i in 0..elements.length() {
        let Some(el) = elements
            .item(i)
            .and_then(|n| n.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(target) = el
            .get_attribute("data-count")
            .and_then(|value| value.parse::<u32>().ok())
        else {
            continue;
        };
        animate_count(el, target);
    }
}

fn animate_count(el: Element, target: u32) {
    if dom::prefers_reduced_motion() {
        set_count(&el, target);
        return;
    }

    let Some(win) = dom::window() else {
        return;
    };

    let counter = Rc::new(RefCell::new(Counter::new(target)));
    let handle: Rc<Cell<i32>> = Rc::new(Cell::new(0));

    let tick_handle = handle.clone();
    let tick = Closure::wrap(Box::new(move || {
        let shown = counter.borrow_mut().tick();
        set_count(&el, shown);
        if counter.borrow().done() {
            if let Some(win) = dom::window() {
                win.clear_interval_with_handle(tick_handle.get());
            }
        }
    }) as Box<dyn FnMut()>);

    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TICK_MS as i32,
    ) {
        handle.set(id);
        tick.forget();
    }
}

/// Rewrites only the leading text node so suffix markup ("+", "%") stays put.
fn set_count(el: &Element, value: u32) {
    if let Some(node) = el.first_child() {
        node.set_text_content(Some(&value.to_string()));
    }
}
