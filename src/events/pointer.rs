//! Global pointer wiring: one pointermove listener feeds the tracker, the
//! trail and the particle field's hover position.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{PointerTracker, Trail};

#[derive(Clone)]
pub struct PointerWiring {
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub trail: Option<Rc<RefCell<Trail>>>,
    /// The field canvas, for in-bounds hover detection.
    pub canvas: Option<web::HtmlCanvasElement>,
    /// Pointer position in canvas space while hovering, None outside.
    pub canvas_pointer: Rc<RefCell<Option<Vec2>>>,
}

pub fn wire(w: PointerWiring) {
    wire_pointermove(&w);
    wire_enter_leave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let first = !w.tracker.borrow().has_moved();
        let moved = w.tracker.borrow_mut().sample(pos);
        if let Some(trail) = &w.trail {
            let mut trail = trail.borrow_mut();
            if first {
                // First sample: materialize the chain under the pointer.
                trail.snap_to(pos);
                trail.set_visible(true);
            }
            if moved {
                trail.notify_movement();
            }
        }
        if let Some(canvas) = &w.canvas {
            let rect = canvas.get_bounding_client_rect();
            let local = Vec2::new(pos.x - rect.left() as f32, pos.y - rect.top() as f32);
            let in_bounds = local.x >= 0.0
                && local.x <= rect.width() as f32
                && local.y >= 0.0
                && local.y <= rect.height() as f32;
            *w.canvas_pointer.borrow_mut() = in_bounds.then_some(local);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_enter_leave(w: &PointerWiring) {
    let Some(document) = crate::dom::window_document() else {
        return;
    };

    let w_leave = w.clone();
    let leave = Closure::wrap(Box::new(move |_: web::MouseEvent| {
        *w_leave.canvas_pointer.borrow_mut() = None;
        if let Some(trail) = &w_leave.trail {
            trail.borrow_mut().set_visible(false);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();

    let w_enter = w.clone();
    let enter = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        // Re-snap so the chain doesn't streak across the page.
        w_enter.tracker.borrow_mut().reset(pos);
        if let Some(trail) = &w_enter.trail {
            let mut trail = trail.borrow_mut();
            trail.snap_to(pos);
            trail.set_visible(true);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();
}
