//! Project showcases: each panel pins its sticky container for the height
//! of the panel while a scrubbed timeline splits the title, pops the image
//! card and spins the badge in.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    SELECTOR_PROJECT, SELECTOR_PROJECT_BADGE, SELECTOR_PROJECT_CARD, SELECTOR_PROJECT_CARD_INNER,
    SELECTOR_PROJECT_META, SELECTOR_PROJECT_STICKY, SELECTOR_PROJECT_TITLE_BOTTOM,
    SELECTOR_PROJECT_TITLE_TOP,
};
use crate::core::constants::PROJECT_SCRUB_TAU;
use crate::core::{Ease, Phase, Pin, ScrollRange};
use crate::dom;
use crate::events;
use crate::frame::Scheduler;
use crate::scroll_binding::ScrollBinding;

struct ProjectScene {
    panel: web::HtmlElement,
    sticky: web::HtmlElement,
    title_top: Option<web::HtmlElement>,
    title_bottom: Option<web::HtmlElement>,
    card: Option<web::HtmlElement>,
    card_inner: Option<web::HtmlElement>,
    badge: Option<web::HtmlElement>,
    meta: Option<web::HtmlElement>,
    pin: Pin,

    split: Phase,
    tilt: Phase,
    card_scale: Phase,
    card_tilt: Phase,
    card_opacity: Phase,
    inner_zoom: Phase,
    badge_spin: Phase,
    badge_scale: Phase,
    meta_fade: Phase,
    meta_rise: Phase,
}

pub fn mount(scheduler: &Scheduler, document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let panels = dom::query_all(&root, SELECTOR_PROJECT);
    if panels.is_empty() {
        log::debug!("[projects] no panels published, skipping");
        return;
    }
    let count = panels.len();
    for panel in panels {
        mount_panel(scheduler, panel);
    }
    log::info!("[projects] wired {count} panels");
}

fn mount_panel(scheduler: &Scheduler, panel: web::HtmlElement) {
    let Some(sticky) = dom::query_all(&panel, SELECTOR_PROJECT_STICKY).into_iter().next() else {
        return;
    };
    let first = |sel: &str| dom::query_all(&panel, sel).into_iter().next();

    let mut scene = ProjectScene {
        sticky,
        title_top: first(SELECTOR_PROJECT_TITLE_TOP),
        title_bottom: first(SELECTOR_PROJECT_TITLE_BOTTOM),
        card: first(SELECTOR_PROJECT_CARD),
        card_inner: first(SELECTOR_PROJECT_CARD_INNER),
        badge: first(SELECTOR_PROJECT_BADGE),
        meta: first(SELECTOR_PROJECT_META),
        panel,
        pin: Pin::new(ScrollRange::new(0.0, 0.0)),
        split: Phase::new(0.0, 1.0, 0.0, 45.0, Ease::QuadInOut),
        tilt: Phase::new(0.0, 1.0, 0.0, 5.0, Ease::QuadInOut),
        card_scale: Phase::new(0.05, 0.6, 0.8, 1.0, Ease::BackOut),
        card_tilt: Phase::new(0.05, 0.6, -6.0, 0.0, Ease::BackOut),
        card_opacity: Phase::new(0.05, 0.6, 0.0, 1.0, Ease::QuadOut),
        inner_zoom: Phase::new(0.0, 1.0, 1.0, 1.1, Ease::Linear),
        badge_spin: Phase::new(0.3, 0.5, 0.0, 360.0, Ease::ElasticOut),
        badge_scale: Phase::new(0.3, 0.5, 0.0, 1.0, Ease::ElasticOut),
        meta_fade: Phase::new(0.4, 0.2, 0.0, 1.0, Ease::QuadOut),
        meta_rise: Phase::new(0.4, 0.2, 20.0, 0.0, Ease::QuadOut),
    };
    scene.rebuild();
    let scene = Rc::new(RefCell::new(scene));

    let scene_apply = scene.clone();
    let binding = ScrollBinding::new(
        scheduler.clone(),
        scene.borrow().pin.range,
        PROJECT_SCRUB_TAU,
        Box::new(move |progress, scroll_y| {
            scene_apply.borrow().apply(progress, scroll_y);
        }),
    );
    {
        let binding = binding.clone();
        events::scroll::wire_scroll(move |scroll_y| binding.on_scroll(scroll_y));
    }
    {
        let binding = binding.clone();
        events::scroll::wire_resize(move || {
            let range = {
                let mut scene = scene.borrow_mut();
                scene.rebuild();
                scene.pin.range
            };
            binding.refresh(range, dom::scroll_y());
        });
    }
}

impl ProjectScene {
    /// Sticky pin range: the panel's own height minus one viewport, so the
    /// sticky content holds until the panel bottom meets the viewport
    /// bottom.
    fn rebuild(&mut self) {
        dom::set_transform(&self.sticky, "");
        let vh = dom::viewport_height();
        let rect = dom::rect(&self.panel);
        let top = rect.top + dom::scroll_y();
        let end = top + (rect.height - vh).max(0.0);
        self.pin = Pin::new(ScrollRange::new(top, end));
    }

    fn apply(&self, p: f32, scroll_y: f32) {
        let offset = self.pin.offset(scroll_y);
        dom::set_transform(&self.sticky, &format!("translate3d(0, {offset}px, 0)"));

        let split = self.split.value_at(p);
        let tilt = self.tilt.value_at(p);
        if let Some(top) = &self.title_top {
            dom::set_transform(
                top,
                &format!("translateY(-{split}%) rotate(-{tilt}deg)"),
            );
        }
        if let Some(bottom) = &self.title_bottom {
            dom::set_transform(
                bottom,
                &format!("translateY({split}%) rotate({tilt}deg)"),
            );
        }
        if let Some(card) = &self.card {
            let scale = self.card_scale.value_at(p);
            let rot = self.card_tilt.value_at(p);
            dom::set_transform(card, &format!("scale({scale}) rotate({rot}deg)"));
            dom::set_opacity(card, self.card_opacity.value_at(p));
        }
        if let Some(inner) = &self.card_inner {
            // Inner parallax: the artwork drifts inside its frame.
            dom::set_transform(inner, &format!("scale({})", self.inner_zoom.value_at(p)));
        }
        if let Some(badge) = &self.badge {
            let rot = self.badge_spin.value_at(p);
            let scale = self.badge_scale.value_at(p).max(0.0);
            dom::set_transform(badge, &format!("rotate({rot}deg) scale({scale})"));
        }
        if let Some(meta) = &self.meta {
            dom::set_opacity(meta, self.meta_fade.value_at(p));
            dom::set_transform(
                meta,
                &format!("translateY({}px)", self.meta_rise.value_at(p)),
            );
        }
    }
}
