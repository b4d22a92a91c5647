//! Condenses the navbar once the page scrolls past the threshold.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::effects::nav::navbar_scrolled;

use super::dom;

pub fn install(document: &Document) {
    let Some(nav) = document.get_element_by_id("main-nav") else {
        return;
    };

    let on_scroll = Closure::wrap(Box::new(move || {
        let offset = dom::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let classes = nav.class_list();
        if navbar_scrolled(offset) {
            let _ = classes.add_1("scrolled");
        } else {
            let _ = classes.remove_1("scrolled");
        }
    }) as Box<dyn FnMut()>);

    if let Some(win) = dom::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}
