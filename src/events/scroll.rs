//! Window scroll/resize wiring. Scroll timelines are event-driven, not
//! frame-polled; resize hands owners a full teardown-and-rebuild.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Call `handler` with the current document scroll offset on every scroll
/// event (and once immediately, so consumers start from the real position).
pub fn wire_scroll(mut handler: impl FnMut(f32) + 'static) {
    handler(dom::scroll_y());
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        handler(dom::scroll_y());
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Viewport resize. Geometry-derived state must be rebuilt wholesale, never
/// patched incrementally.
pub fn wire_resize(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        handler();
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
