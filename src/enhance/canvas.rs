//! Background constellation: drives the particle field on the full-viewport
//! canvas with a self-rescheduling animation-frame loop.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use crate::effects::particles::ParticleField;
use crate::effects::render::{self, Surface};

use super::dom;

// Accent gold, shared with the stylesheet palette.
const PARTICLE_RGB: (u8, u8, u8) = (201, 169, 110);
const LINK_WIDTH: f64 = 0.5;

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, alpha: f64) {
        let (r, g, b) = PARTICLE_RGB;
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx
            .set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
        self.ctx.set_line_width(LINK_WIDTH);
        self.ctx.stroke();
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        let (r, g, b) = PARTICLE_RGB;
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx
            .set_fill_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
        self.ctx.fill();
    }
}

pub fn install(document: &Document) {
    let Some(canvas) = document
        .get_element_by_id("bg-canvas")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };

    let (width, height) = dom::viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut rand = || js_sys::Math::random();
    let field = Rc::new(RefCell::new(ParticleField::new(width, height, &mut rand)));
    let mut surface = CanvasSurface { ctx };

    if dom::prefers_reduced_motion() {
        render::draw(&field.borrow(), &mut surface);
        return;
    }

    wire_resize(&canvas, &field);
    wire_parallax(document, &field);

    // The closure re-requests itself each frame, so it has to exist before
    // its own body can reference it.
    let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let animate_inner = animate.clone();
    let frame_field = field;
    *animate.borrow_mut() = Some(Closure::new(move || {
        {
            let mut f = frame_field.borrow_mut();
            render::draw(&f, &mut surface);
            f.step();
        }
        if let (Some(win), Some(cb)) = (dom::window(), animate_inner.borrow().as_ref()) {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let (Some(win), Some(cb)) = (dom::window(), animate.borrow().as_ref()) {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn wire_resize(canvas: &HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let canvas = canvas.clone();
    let field = field.clone();
    let resize = Closure::wrap(Box::new(move || {
        let (width, height) = dom::viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut()>);

    if let Some(win) = dom::window() {
        let _ = win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    }
    resize.forget();
}

fn wire_parallax(document: &Document, field: &Rc<RefCell<ParticleField>>) {
    let field = field.clone();
    let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
        let mut f = field.borrow_mut();
        let (width, height) = f.size();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let nx = (f64::from(event.client_x()) / width - 0.5) * 2.0;
        let ny = (f64::from(event.client_y()) / height - 0.5) * 2.0;
        f.nudge_toward(nx, ny);
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = document.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
    mousemove.forget();
}
