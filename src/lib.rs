#![cfg(target_arch = "wasm32")]
//! Animation and interaction engine for a single-page showcase.
//!
//! The pure simulations live in `core`; everything here wires them to the
//! rendering surface (published anchor elements, pointer/scroll/resize
//! events, one shared requestAnimationFrame loop). A failure anywhere in
//! this layer degrades a visual flourish and never blocks page content.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod content;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod hero;
mod intro;
mod navbar;
mod overlay;
mod projects;
mod reveal;
mod scroll_binding;
mod theme;

use crate::core::PointerTracker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // One layout pass before the first geometry batch.
    dom::next_frame().await;

    let theme = Rc::new(RefCell::new(theme::Theme::init(&document)));
    let scheduler = frame::Scheduler::new();
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let canvas_pointer: Rc<RefCell<Option<Vec2>>> = Rc::new(RefCell::new(None));

    let canvas = background::mount(
        &scheduler,
        &document,
        tracker.clone(),
        canvas_pointer.clone(),
        theme.clone(),
    );
    if canvas.is_none() {
        log::warn!("[init] no field canvas published, background disabled");
    }

    let trail = cursor::mount(&scheduler, &document, tracker.clone());
    if trail.is_none() {
        log::warn!("[init] no cursor anchors published, custom cursor disabled");
    }

    events::pointer::wire(events::pointer::PointerWiring {
        tracker: tracker.clone(),
        trail: trail.clone(),
        canvas,
        canvas_pointer,
    });

    navbar::mount(&scheduler, &document);

    // Scroll consumers are wired before the intro so its handoff signal
    // always finds its listeners.
    hero::mount(&scheduler, &document);
    reveal::mount(&scheduler, &document);
    projects::mount(&scheduler, &document);

    if let Some(menu) = overlay::mount(&scheduler, &document, theme.clone(), trail) {
        events::keyboard::wire_menu_keys(menu);
    } else {
        log::warn!("[init] no menu anchors published, overlay disabled");
    }

    let seen_before = theme.borrow().seen_before();
    intro::mount(&scheduler, &document, seen_before);

    log::info!("[init] engine ready");
    Ok(())
}
