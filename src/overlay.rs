//! Overlay menu: explicit closed/opening/open/closing choreography with
//! scroll lock, focus containment and the accent-cycle advance bound to the
//! closing beat.
//!
//! The curtain snapshots the outgoing accent before the cycle advances, so
//! only newly revealed content behind it picks up the new color while the
//! receding curtain keeps the old one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    ID_MENU_LINKS, ID_MENU_OVERLAY, ID_MENU_SOCIAL, ID_MENU_TOGGLE, SIGNAL_MENU_CLOSED,
};
use crate::content::{NAV_LINKS, SOCIAL_LINKS};
use crate::core::constants::*;
use crate::core::{Ease, MenuPhase, MenuState, Phase, TickerHandle, Trail, TrailMode};
use crate::dom;
use crate::frame::Scheduler;
use crate::theme::Theme;

struct MenuShared {
    scheduler: Scheduler,
    document: web::Document,
    curtain: web::HtmlElement,
    toggle_btn: web::HtmlElement,
    links: Vec<web::HtmlElement>,
    theme: Rc<RefCell<Theme>>,
    trail: Option<Rc<RefCell<Trail>>>,
    state: RefCell<MenuState>,
    handle: RefCell<Option<TickerHandle>>,
}

/// Cloneable handle to the overlay menu.
#[derive(Clone)]
pub struct MenuOverlay {
    shared: Rc<MenuShared>,
}

pub fn mount(
    scheduler: &Scheduler,
    document: &web::Document,
    theme: Rc<RefCell<Theme>>,
    trail: Option<Rc<RefCell<Trail>>>,
) -> Option<MenuOverlay> {
    let curtain = dom::element_by_id(document, ID_MENU_OVERLAY)?;
    let toggle_btn = dom::element_by_id(document, ID_MENU_TOGGLE)?;
    let links_host = dom::element_by_id(document, ID_MENU_LINKS)?;

    // The panel's list content is engine-built from the content records;
    // the host containers themselves belong to the surface.
    let mut links = Vec::with_capacity(NAV_LINKS.len());
    for link in NAV_LINKS {
        let el: web::HtmlElement = document
            .create_element("a")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name("menu-link");
        _ = el.set_attribute("href", link.href);
        _ = el.set_attribute("title", link.description);
        el.set_text_content(Some(link.label));
        _ = links_host.append_child(&el);
        links.push(el);
    }
    if let Some(social_host) = dom::element_by_id(document, ID_MENU_SOCIAL) {
        for link in SOCIAL_LINKS {
            if let Ok(el) = document.create_element("a") {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    el.set_class_name("menu-social-link");
                    _ = el.set_attribute("href", link.href);
                    _ = el.set_attribute("target", "_blank");
                    el.set_text_content(Some(link.label));
                    _ = social_host.append_child(&el);
                }
            }
        }
    }

    dom::set_style(&curtain, "display", "none");
    dom::set_opacity(&curtain, 0.0);

    let menu = MenuOverlay {
        shared: Rc::new(MenuShared {
            scheduler: scheduler.clone(),
            document: document.clone(),
            curtain,
            toggle_btn,
            links,
            theme,
            trail,
            state: RefCell::new(MenuState::new()),
            handle: RefCell::new(None),
        }),
    };

    {
        let menu = menu.clone();
        dom::add_click_listener(document, ID_MENU_TOGGLE, move || menu.toggle());
    }
    for link in &menu.shared.links {
        let menu_for_link = menu.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::MouseEvent| {
            menu_for_link.request_close();
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::info!("[menu] mounted ({} links)", menu.shared.links.len());
    Some(menu)
}

impl MenuOverlay {
    pub fn toggle(&self) {
        let open = self.shared.state.borrow().is_open();
        if open {
            self.request_close();
        } else {
            self.request_open();
        }
    }

    pub fn is_open(&self) -> bool {
        self.shared.state.borrow().is_open()
    }

    /// Keep keyboard focus inside the open panel.
    pub fn cycle_focus(&self, backwards: bool) {
        let links = &self.shared.links;
        if links.is_empty() {
            return;
        }
        let active = self.shared.document.active_element();
        let current = links.iter().position(|el| {
            let node: &web::Node = el.as_ref();
            active.as_ref().is_some_and(|a| {
                let a_node: &web::Node = a.as_ref();
                a_node.is_same_node(Some(node))
            })
        });
        let next = match (current, backwards) {
            (Some(i), false) => (i + 1) % links.len(),
            (Some(i), true) => (i + links.len() - 1) % links.len(),
            (None, false) => 0,
            (None, true) => links.len() - 1,
        };
        _ = links[next].focus();
    }

    pub fn request_open(&self) {
        if !self.shared.state.borrow_mut().request_open() {
            // Mid-flight or already open: dropped, not queued.
            log::debug!("[menu] open request dropped");
            return;
        }
        let s = &self.shared;
        dom::lock_scroll(&s.document);
        if let Some(trail) = &s.trail {
            trail.borrow_mut().set_mode(TrailMode::Spotlight);
        }
        dom::set_style(&s.curtain, "display", "block");
        dom::set_transform(&s.curtain, "");
        for link in &s.links {
            dom::set_opacity(link, 0.0);
            dom::set_transform(link, "translateY(100%)");
        }

        let curtain_in = Phase::new(0.0, MENU_CURTAIN_IN_SEC, 0.0, 1.0, Ease::QuadOut);
        let link_phases: Vec<(Phase, Phase)> = (0..s.links.len())
            .map(|i| {
                let start = MENU_LINKS_START + i as f32 * MENU_LINK_STAGGER;
                (
                    Phase::new(start, MENU_LINK_DUR, 0.0, 1.0, Ease::QuadOut),
                    Phase::new(start, MENU_LINK_DUR, 100.0, 0.0, Ease::ExpoOut),
                )
            })
            .collect();
        let total = link_phases
            .iter()
            .map(|(fade, _)| fade.end())
            .fold(curtain_in.end(), f32::max);

        let menu = self.clone();
        let elapsed = Cell::new(0.0f32);
        let handle = s.scheduler.register(Box::new(move |dt| {
            let t = elapsed.get() + dt;
            elapsed.set(t);
            let s = &menu.shared;
            dom::set_opacity(&s.curtain, curtain_in.value_at(t));
            for (link, (fade, rise)) in s.links.iter().zip(&link_phases) {
                dom::set_opacity(link, fade.value_at(t));
                dom::set_transform(link, &format!("translateY({}%)", rise.value_at(t)));
            }
            if t >= total {
                menu.finish_transition();
            }
        }));
        *s.handle.borrow_mut() = Some(handle);
        log::info!("[menu] opening");
    }

    pub fn request_close(&self) {
        if !self.shared.state.borrow_mut().request_close() {
            log::debug!("[menu] close request dropped");
            return;
        }
        let s = &self.shared;
        // Freeze the outgoing accent on the curtain, then rotate the cycle:
        // the content revealed behind the recede shows the new color, the
        // curtain itself never changes mid-flight.
        let outgoing = s.theme.borrow().color();
        dom::set_style(&s.curtain, "background-color", outgoing);
        s.theme.borrow_mut().advance(&s.document);

        let curtain_out = Phase::new(0.0, MENU_CLOSE_SEC, 0.0, -100.0, Ease::QuartInOut);
        let links_out = Phase::new(0.0, 0.2, 1.0, 0.0, Ease::QuadIn);
        let total = curtain_out.end();

        let menu = self.clone();
        let elapsed = Cell::new(0.0f32);
        let handle = s.scheduler.register(Box::new(move |dt| {
            let t = elapsed.get() + dt;
            elapsed.set(t);
            let s = &menu.shared;
            dom::set_transform(
                &s.curtain,
                &format!("translateY({}%)", curtain_out.value_at(t)),
            );
            for link in &s.links {
                dom::set_opacity(link, links_out.value_at(t));
            }
            if t >= total {
                menu.finish_transition();
            }
        }));
        *s.handle.borrow_mut() = Some(handle);
        log::info!("[menu] closing");
    }

    /// Terminal completion for whichever transition is in flight; runs from
    /// inside the transition's own frame callback.
    fn finish_transition(&self) {
        let s = &self.shared;
        let phase = {
            if let Some(h) = s.handle.borrow_mut().take() {
                s.scheduler.unregister(h);
            }
            s.state.borrow_mut().finish()
        };
        match phase {
            MenuPhase::Open => {
                if let Some(first) = s.links.first() {
                    _ = first.focus();
                }
                log::info!("[menu] open");
            }
            MenuPhase::Closed => {
                dom::set_style(&s.curtain, "display", "none");
                dom::set_transform(&s.curtain, "");
                dom::clear_style(&s.curtain, "background-color");
                dom::unlock_scroll(&s.document);
                if let Some(trail) = &s.trail {
                    trail.borrow_mut().set_mode(TrailMode::Visible);
                }
                _ = s.toggle_btn.focus();
                // Listeners waiting on full dismissal (stacking releases and
                // the like) hear about it exactly here.
                dom::dispatch(SIGNAL_MENU_CLOSED);
                log::info!("[menu] closed");
            }
            other => {
                log::warn!("[menu] unexpected finish in {:?}", other);
            }
        }
    }
}
