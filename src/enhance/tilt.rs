//! 3D hover tilt for the photo frame and the skill cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, HtmlElement, MouseEvent};

use crate::effects::tilt::{
    card_transform, frame_transform, tilt_angles, CARD_DIVISOR, FRAME_DIVISOR, FRAME_REST,
};

use super::dom;

pub fn install(document: &Document) {
    if dom::prefers_reduced_motion() {
        return;
    }
    install_photo_frame(document);
    install_cards(document);
}

fn install_photo_frame(document: &Document) {
    let Some(frame) = document
        .get_element_by_id("photo-frame")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(wrap) = frame.parent_element() else {
        return;
    };

    let moving = frame.clone();
    let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
        let (cx, cy) = rect_center(&moving.get_bounding_client_rect());
        let (rx, ry) = tilt_angles(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            cx,
            cy,
            FRAME_DIVISOR,
        );
        let _ = moving
            .style()
            .set_property("transform", &frame_transform(rx, ry));
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = wrap.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
    mousemove.forget();

    let mouseleave = Closure::wrap(Box::new(move || {
        let _ = frame.style().set_property("transform", FRAME_REST);
    }) as Box<dyn FnMut()>);
    let _ = wrap.add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref());
    mouseleave.forget();
}

fn install_cards(document: &Document) {
    let Ok(cards) = document.query_selector_all(".card-3d") else {
        return;
    };

    for i in 0..cards.length() {
        let Some(card) = cards
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let tilting = card.clone();
        let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
            let (cx, cy) = rect_center(&tilting.get_bounding_client_rect());
            let (rx, ry) = tilt_angles(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                cx,
                cy,
                CARD_DIVISOR,
            );
            let _ = tilting
                .style()
                .set_property("transform", &card_transform(rx, ry));
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ =
            card.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
        mousemove.forget();

        let resting = card.clone();
        let mouseleave = Closure::wrap(Box::new(move || {
            // Dropping the property entirely lets the stylesheet's resting
            // transform (and transition) take back over.
            let _ = resting.style().remove_property("transform");
        }) as Box<dyn FnMut()>);
        let _ =
            card.add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref());
        mouseleave.forget();
    }
}

fn rect_center(rect: &DomRect) -> (f64, f64) {
    (
        (rect.left() + rect.right()) / 2.0,
        (rect.top() + rect.bottom()) / 2.0,
    )
}
