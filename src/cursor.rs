//! Custom cursor: the smoothed head dot plus the engine-owned trail marker
//! elements, stepped every active frame.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ID_CURSOR_DOT, ID_CURSOR_TRAIL, SELECTOR_INTERACTIVE};
use crate::content::TRAIL_COLORS;
use crate::core::constants::{TRAIL_LERPS, TRAIL_QUIET_SEC, TRAIL_SIZES_PX};
use crate::core::{PointerTracker, Trail};
use crate::dom;
use crate::frame::Scheduler;

/// Wire the cursor. Returns the shared trail so the menu overlay can own
/// spotlight mode; a missing dot or container degrades to no custom cursor.
pub fn mount(
    scheduler: &Scheduler,
    document: &web::Document,
    tracker: Rc<RefCell<PointerTracker>>,
) -> Option<Rc<RefCell<Trail>>> {
    let dot = dom::element_by_id(document, ID_CURSOR_DOT)?;
    let container = dom::element_by_id(document, ID_CURSOR_TRAIL)?;

    // The markers are engine-owned overlay nodes appended to the published
    // container; the surface tree itself is never restructured.
    let mut marker_els = Vec::with_capacity(TRAIL_LERPS.len());
    for i in 0..TRAIL_LERPS.len() {
        let el: web::HtmlElement = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name("trail-marker");
        let size = TRAIL_SIZES_PX[i];
        dom::set_style(&el, "width", &format!("{size}px"));
        dom::set_style(&el, "height", &format!("{size}px"));
        dom::set_style(&el, "background-color", TRAIL_COLORS[i % TRAIL_COLORS.len()]);
        dom::set_opacity(&el, 0.0);
        _ = container.append_child(&el);
        marker_els.push(el);
    }

    let trail = Rc::new(RefCell::new(Trail::new(&TRAIL_LERPS)));
    wire_hover_targets(document, &trail);

    let trail_for_tick = trail.clone();
    scheduler.register(Box::new(move |dt| {
        let mut tracker = tracker.borrow_mut();
        tracker.step(dt);
        let mut trail = trail_for_tick.borrow_mut();
        trail.step(dt, tracker.smoothed);
        if tracker.is_idle(TRAIL_QUIET_SEC) && trail.trigger_burst() {
            log::debug!("[cursor] burst");
        }
        dom::set_centered_transform(
            &dot,
            tracker.smoothed.x,
            tracker.smoothed.y,
            trail.head_scale(),
        );
        dom::set_opacity(&dot, trail.head_opacity());
        for (el, m) in marker_els.iter().zip(trail.markers()) {
            dom::set_centered_transform(el, m.pos.x, m.pos.y, m.scale);
            dom::set_opacity(el, m.opacity);
        }
    }));
    log::info!("[cursor] mounted ({} trail markers)", TRAIL_LERPS.len());
    Some(trail)
}

/// Grow the cursor over interactive elements.
fn wire_hover_targets(document: &web::Document, trail: &Rc<RefCell<Trail>>) {
    let Some(body) = document.body() else {
        return;
    };
    for el in dom::query_all(&body, SELECTOR_INTERACTIVE) {
        let enter_trail = trail.clone();
        let enter = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            enter_trail.borrow_mut().set_hover(true);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let leave_trail = trail.clone();
        let leave = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            leave_trail.borrow_mut().set_hover(false);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}
