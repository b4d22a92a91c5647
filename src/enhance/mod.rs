//! DOM wiring for the page effects. Each submodule installs one independent
//! feature; a feature whose elements are missing from the document skips
//! itself silently. Listener and observer callbacks are leaked on purpose,
//! since they live for the rest of the page.

mod canvas;
mod counters;
mod cursor;
mod dom;
mod nav;
mod navbar;
mod reveal;
mod tilt;

pub fn install() {
    let Some(document) = dom::document() else {
        log::warn!("no document available, skipping page enhancements");
        return;
    };

    cursor::install(&document);
    canvas::install(&document);
    reveal::install(&document);
    counters::install(&document);
    tilt::install(&document);
    nav::install(&document);
    navbar::install(&document);

    log::info!("page enhancements installed");
}
