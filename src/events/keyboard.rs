//! Global keyboard wiring: escape dismissal and focus containment for the
//! overlay menu.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay::MenuOverlay;

pub fn wire_menu_keys(menu: MenuOverlay) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => {
                // Dropped by the state machine unless the menu is fully open.
                menu.request_close();
            }
            "Tab" => {
                if menu.is_open() {
                    // Keep focus inside the panel while the menu owns input.
                    menu.cycle_focus(ev.shift_key());
                    ev.prevent_default();
                }
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
