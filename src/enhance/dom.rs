//! Small lookup helpers shared by the enhancement installers. Everything
//! returns `Option` so a missing handle skips the feature instead of
//! throwing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverInit, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Builds an [`IntersectionObserver`] with a single visibility threshold.
/// The callback receives the raw entries array; callers downcast entries as
/// they iterate.
pub fn intersection_observer(
    threshold: f64,
    callback: &Closure<dyn FnMut(js_sys::Array)>,
) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
