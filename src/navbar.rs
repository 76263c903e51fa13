//! Navbar entrance: the left cluster and contact link drop in from above
//! with a short overlap.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::constants::{ID_NAVBAR_CONTACT, ID_NAVBAR_LEFT};
use crate::core::{Ease, Phase, TickerHandle};
use crate::dom;
use crate::frame::Scheduler;

pub fn mount(scheduler: &Scheduler, document: &web::Document) {
    let left = dom::element_by_id(document, ID_NAVBAR_LEFT);
    let contact = dom::element_by_id(document, ID_NAVBAR_CONTACT);
    if left.is_none() && contact.is_none() {
        return;
    }
    let parts: Vec<(web::HtmlElement, Phase, Phase)> = [(left, 0.0), (contact, 0.2)]
        .into_iter()
        .filter_map(|(el, start)| {
            el.map(|el| {
                dom::set_opacity(&el, 0.0);
                (
                    el,
                    Phase::new(start, 0.8, 0.0, 1.0, Ease::QuadOut),
                    Phase::new(start, 0.8, -30.0, 0.0, Ease::CubicOut),
                )
            })
        })
        .collect();
    let total = parts.iter().map(|(_, fade, _)| fade.end()).fold(0.0, f32::max);

    let elapsed = Cell::new(0.0f32);
    let handle: Rc<RefCell<Option<TickerHandle>>> = Rc::new(RefCell::new(None));
    let handle_in_tick = handle.clone();
    let scheduler_in_tick = scheduler.clone();
    let h = scheduler.register(Box::new(move |dt| {
        let t = elapsed.get() + dt;
        elapsed.set(t);
        for (el, fade, drop) in &parts {
            dom::set_opacity(el, fade.value_at(t));
            dom::set_transform(el, &format!("translateY({}px)", drop.value_at(t)));
        }
        if t >= total {
            if let Some(h) = handle_in_tick.borrow_mut().take() {
                scheduler_in_tick.unregister(h);
            }
        }
    }));
    *handle.borrow_mut() = Some(h);
    log::info!("[navbar] entrance wired");
}
