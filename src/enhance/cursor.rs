//! Custom cursor follower: tracks the pointer and shrinks over interactive
//! elements.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

const HOVER_TARGETS: &str = "a, button, .btn, .skill-card, .achieve-card, .stat";
const HOVER_SIZE: &str = "6px";
const REST_SIZE: &str = "12px";

pub fn install(document: &Document) {
    let Some(tracker) = document
        .get_element_by_id("cursor")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let follow_target = tracker.clone();
    let follow = Closure::wrap(Box::new(move |event: MouseEvent| {
        let style = follow_target.style();
        let _ = style.set_property("left", &format!("{}px", event.client_x()));
        let _ = style.set_property("top", &format!("{}px", event.client_y()));
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("mousemove", follow.as_ref().unchecked_ref());
    follow.forget();

    let Ok(targets) = document.query_selector_all(HOVER_TARGETS) else {
        return;
    };

    let shrink_target = tracker.clone();
    let shrink = Closure::wrap(Box::new(move || {
        set_size(&shrink_target, HOVER_SIZE);
    }) as Box<dyn FnMut()>);

    let restore = Closure::wrap(Box::new(move || {
        set_size(&tracker, REST_SIZE);
    }) as Box<dyn FnMut()>);

    for i in 0..targets.length() {
        let Some(node) = targets.item(i) else {
            continue;
        };
        let _ = node.add_event_listener_with_callback("mouseenter", shrink.as_ref().unchecked_ref());
        let _ = node.add_event_listener_with_callback("mouseleave", restore.as_ref().unchecked_ref());
    }

    shrink.forget();
    restore.forget();
}

fn set_size(tracker: &HtmlElement, size: &str) {
    let style = tracker.style();
    let _ = style.set_property("width", size);
    let _ = style.set_property("height", size);
}
