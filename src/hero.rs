//! Hero banner: the letter-by-letter entrance (armed by the intro handoff)
//! and the scroll-driven sequence that flies the initials into the navbar
//! brand mark while the rest of the banner fades out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    ID_BRAND_A, ID_BRAND_M, ID_FLY_A, ID_FLY_M, ID_HERO, ID_HERO_A, ID_HERO_M, ID_HERO_SPACER,
    ID_HERO_TAGLINE, ID_NAVBAR_BRAND, SELECTOR_HERO_FIRST_LETTERS, SELECTOR_HERO_LAST_LETTERS,
    SIGNAL_INTRO_COMPLETE, SIGNAL_INTRO_HANDOFF,
};
use crate::core::constants::*;
use crate::core::{Ease, FlightDelta, Phase, Pin, ScrollRange, Timeline};
use crate::dom;
use crate::events;
use crate::frame::Scheduler;
use crate::scroll_binding::ScrollBinding;

pub fn mount(scheduler: &Scheduler, document: &web::Document) {
    wire_entrance(scheduler, document);
    wire_scroll_sequence(scheduler, document);
}

// ---------------- entrance ----------------

/// Staggered letter rise once the intro hands the initials over. The two
/// handoff target letters are excluded: the intro's cross-dissolve owns
/// their opacity until it lands.
fn wire_entrance(scheduler: &Scheduler, document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let first: Vec<_> = dom::query_all(&root, SELECTOR_HERO_FIRST_LETTERS)
        .into_iter()
        .filter(|el| el.id() != ID_HERO_M && el.id() != ID_HERO_A)
        .collect();
    let last: Vec<_> = dom::query_all(&root, SELECTOR_HERO_LAST_LETTERS)
        .into_iter()
        .filter(|el| el.id() != ID_HERO_M && el.id() != ID_HERO_A)
        .collect();
    let tagline = dom::element_by_id(document, ID_HERO_TAGLINE);
    if first.is_empty() && last.is_empty() {
        return;
    }

    let mut tl = Timeline::new();
    let mut rises = Vec::new();
    for (i, el) in first.iter().enumerate() {
        let start = HERO_ENTRANCE_DELAY + i as f32 * HERO_LETTER_STAGGER;
        let opacity = tl.add(Phase::new(start, HERO_LETTER_DUR, 0.0, 1.0, Ease::QuadOut));
        let rise = tl.add(Phase::new(
            start,
            HERO_LETTER_DUR,
            HERO_LETTER_RISE_PX,
            0.0,
            Ease::BackOut,
        ));
        rises.push((el.clone(), opacity, rise));
    }
    let first_end = HERO_ENTRANCE_DELAY
        + first.len().saturating_sub(1) as f32 * HERO_LETTER_STAGGER
        + HERO_LETTER_DUR;
    for (i, el) in last.iter().enumerate() {
        let start = (first_end - 0.35).max(0.0) + i as f32 * HERO_LAST_STAGGER;
        let opacity = tl.add(Phase::new(start, HERO_LAST_DUR, 0.0, 1.0, Ease::QuadOut));
        let rise = tl.add(Phase::new(
            start,
            HERO_LAST_DUR,
            HERO_LAST_RISE_PX,
            0.0,
            Ease::ElasticOut,
        ));
        rises.push((el.clone(), opacity, rise));
    }
    let tagline_phase = tagline.as_ref().map(|el| {
        let start = (tl.span() - 1.0).max(0.0);
        let opacity = tl.add(Phase::new(start, HERO_TAGLINE_DUR, 0.0, 1.0, Ease::QuadOut));
        let rise = tl.add(Phase::new(start, HERO_TAGLINE_DUR, 20.0, 0.0, Ease::QuadOut));
        (el.clone(), opacity, rise)
    });

    // Letters wait hidden until the sequence starts.
    for (el, ..) in &rises {
        dom::set_opacity(el, 0.0);
    }
    if let Some((el, ..)) = &tagline_phase {
        dom::set_opacity(el, 0.0);
    }

    let scheduler = scheduler.clone();
    let armed = Rc::new(Cell::new(false));
    dom::listen(SIGNAL_INTRO_HANDOFF, move || {
        if armed.replace(true) {
            return;
        }
        log::info!("[hero] entrance armed");
        let tl_span = tl.span();
        let rises = rises.clone();
        let tagline_phase = tagline_phase.clone();
        let elapsed = Cell::new(0.0f32);
        let handle: Rc<RefCell<Option<crate::core::TickerHandle>>> =
            Rc::new(RefCell::new(None));
        let handle_in_tick = handle.clone();
        let scheduler_in_tick = scheduler.clone();
        // Timeline is shared with the closure; values are read per frame.
        let tl = Rc::new(tl.clone());
        let h = scheduler.register(Box::new(move |dt| {
            let t = elapsed.get() + dt;
            elapsed.set(t);
            for (el, opacity, rise) in &rises {
                dom::set_opacity(el, tl.value(*opacity, t));
                dom::set_transform(el, &format!("translateY({}px)", tl.value(*rise, t)));
            }
            if let Some((el, opacity, rise)) = &tagline_phase {
                dom::set_opacity(el, tl.value(*opacity, t));
                dom::set_transform(el, &format!("translateY({}px)", tl.value(*rise, t)));
            }
            if t >= tl_span {
                if let Some(h) = handle_in_tick.borrow_mut().take() {
                    scheduler_in_tick.unregister(h);
                }
            }
        }));
        *handle.borrow_mut() = Some(h);
    });
}

// ---------------- scroll sequence ----------------

struct HeroScroll {
    hero: web::HtmlElement,
    spacer: web::HtmlElement,
    fly_m: web::HtmlElement,
    fly_a: web::HtmlElement,
    hero_m: web::HtmlElement,
    hero_a: web::HtmlElement,
    nav_brand: web::HtmlElement,
    brand_m: web::HtmlElement,
    brand_a: web::HtmlElement,
    tagline: Option<web::HtmlElement>,
    fade_letters: Vec<(web::HtmlElement, Phase)>,

    // Geometry, rebuilt wholesale on resize.
    pin: Pin,
    snap_m: (f32, f32),
    snap_a: (f32, f32),
    flight_m: FlightDelta,
    flight_a: FlightDelta,
    font_from: f32,
    font_to: f32,

    // Normalized phases over the scroll range.
    fly_in: Phase,
    fly_out: Phase,
    target_out: Phase,
    pop: Phase,
    settle: Phase,
    flight: Phase,
    brand_in: Phase,
    tagline_out: Phase,
}

fn wire_scroll_sequence(scheduler: &Scheduler, document: &web::Document) {
    let hero = dom::element_by_id(document, ID_HERO);
    let spacer = dom::element_by_id(document, ID_HERO_SPACER);
    let fly_m = dom::element_by_id(document, ID_FLY_M);
    let fly_a = dom::element_by_id(document, ID_FLY_A);
    let hero_m = dom::element_by_id(document, ID_HERO_M);
    let hero_a = dom::element_by_id(document, ID_HERO_A);
    let nav_brand = dom::element_by_id(document, ID_NAVBAR_BRAND);
    let brand_m = dom::element_by_id(document, ID_BRAND_M);
    let brand_a = dom::element_by_id(document, ID_BRAND_A);
    let (
        Some(hero),
        Some(spacer),
        Some(fly_m),
        Some(fly_a),
        Some(hero_m),
        Some(hero_a),
        Some(nav_brand),
        Some(brand_m),
        Some(brand_a),
    ) = (
        hero, spacer, fly_m, fly_a, hero_m, hero_a, nav_brand, brand_m, brand_a,
    )
    else {
        log::warn!("[hero] scroll sequence anchors missing, skipping");
        return;
    };

    let root = match document.document_element() {
        Some(r) => r,
        None => return,
    };
    let mut fade_letters = Vec::new();
    for (i, el) in dom::query_all(&root, SELECTOR_HERO_FIRST_LETTERS)
        .into_iter()
        .filter(|el| el.id() != ID_HERO_M && el.id() != ID_HERO_A)
        .enumerate()
    {
        fade_letters.push((
            el,
            Phase::new(0.01 + i as f32 * 0.025, 0.12, 1.0, 0.0, Ease::QuadIn),
        ));
    }
    for (i, el) in dom::query_all(&root, SELECTOR_HERO_LAST_LETTERS)
        .into_iter()
        .filter(|el| el.id() != ID_HERO_M && el.id() != ID_HERO_A)
        .enumerate()
    {
        fade_letters.push((
            el,
            Phase::new(0.03 + i as f32 * 0.025, 0.12, 1.0, 0.0, Ease::QuadIn),
        ));
    }

    let mut hs = HeroScroll {
        hero,
        spacer,
        fly_m,
        fly_a,
        hero_m,
        hero_a,
        nav_brand,
        brand_m,
        brand_a,
        tagline: dom::element_by_id(document, ID_HERO_TAGLINE),
        fade_letters,
        pin: Pin::new(ScrollRange::new(0.0, 0.0)),
        snap_m: (0.0, 0.0),
        snap_a: (0.0, 0.0),
        flight_m: FlightDelta {
            dx: 0.0,
            dy: 0.0,
            scale: 1.0,
        },
        flight_a: FlightDelta {
            dx: 0.0,
            dy: 0.0,
            scale: 1.0,
        },
        font_from: 0.0,
        font_to: 0.0,
        fly_in: Phase::new(0.002, 0.02, 0.0, 1.0, Ease::Linear),
        fly_out: Phase::new(0.71, 0.1, 1.0, 0.0, Ease::QuadIn),
        target_out: Phase::new(0.002, 0.02, 1.0, 0.0, Ease::Linear),
        pop: Phase::new(0.02, 0.04, 1.0, 1.05, Ease::BackOut),
        settle: Phase::new(0.06, 0.65, 1.05, 1.0, Ease::QuadInOut),
        flight: Phase::new(0.06, 0.65, 0.0, 1.0, Ease::QuadInOut),
        brand_in: Phase::new(0.71, 0.1, 0.0, 1.0, Ease::QuadInOut),
        tagline_out: Phase::new(0.08, 0.2, 1.0, 0.0, Ease::QuadIn),
    };
    hs.rebuild();
    let hs = Rc::new(RefCell::new(hs));

    // The scroll sequence stays inert until the intro fully releases the
    // page; before that its writers would fight the entrance timeline.
    let armed = Rc::new(Cell::new(false));

    let hs_apply = hs.clone();
    let armed_apply = armed.clone();
    let binding = ScrollBinding::new(
        scheduler.clone(),
        hs.borrow().pin.range,
        HERO_SCRUB_TAU,
        Box::new(move |progress, scroll_y| {
            if armed_apply.get() {
                hs_apply.borrow_mut().apply(progress, scroll_y);
            }
        }),
    );

    {
        let hs = hs.clone();
        let binding = binding.clone();
        let armed = armed.clone();
        dom::listen(SIGNAL_INTRO_COMPLETE, move || {
            if armed.replace(true) {
                return;
            }
            let range = hs.borrow().pin.range;
            binding.refresh(range, dom::scroll_y());
        });
    }
    {
        let binding = binding.clone();
        events::scroll::wire_scroll(move |scroll_y| binding.on_scroll(scroll_y));
    }
    {
        let hs = hs.clone();
        let binding = binding.clone();
        events::scroll::wire_resize(move || {
            let range = {
                let mut hs = hs.borrow_mut();
                hs.rebuild();
                hs.pin.range
            };
            binding.refresh(range, dom::scroll_y());
        });
    }
    log::info!("[hero] scroll sequence wired");
}

impl HeroScroll {
    /// Full geometry rebuild: spacer height, scroll range, pin, snap and
    /// flight deltas. All rects are sampled in one batch after transforms
    /// are reset, before any writes.
    fn rebuild(&mut self) {
        let vh = dom::viewport_height();
        let range_len = vh * HERO_SCROLL_VIEWPORTS;
        dom::set_style(&self.spacer, "height", &format!("{range_len}px"));

        dom::set_transform(&self.hero, "");
        dom::set_transform(&self.fly_m, "");
        dom::set_transform(&self.fly_a, "");
        dom::clear_style(&self.fly_m, "font-size");
        dom::clear_style(&self.fly_a, "font-size");

        let scroll_y = dom::scroll_y();
        let hero_rect = dom::rect(&self.hero);
        let fly_m_rect = dom::rect(&self.fly_m);
        let fly_a_rect = dom::rect(&self.fly_a);
        let hero_m_rect = dom::rect(&self.hero_m);
        let hero_a_rect = dom::rect(&self.hero_a);
        let brand_m_rect = dom::rect(&self.brand_m);
        let brand_a_rect = dom::rect(&self.brand_a);

        let start = hero_rect.top + scroll_y;
        let range = ScrollRange::new(start, start + range_len);
        self.pin = Pin::with_parallax(
            range,
            HERO_PIN_TRAIL_RATE,
            vh * HERO_PIN_TRAIL_VIEWPORTS,
        );

        self.snap_m = (
            hero_m_rect.left - fly_m_rect.left,
            hero_m_rect.top - fly_m_rect.top,
        );
        self.snap_a = (
            hero_a_rect.left - fly_a_rect.left,
            hero_a_rect.top - fly_a_rect.top,
        );
        self.flight_m = FlightDelta::between(&hero_m_rect, &brand_m_rect);
        self.flight_a = FlightDelta::between(&hero_a_rect, &brand_a_rect);
        self.font_from = dom::computed_px(&self.hero_m, "font-size").unwrap_or(0.0);
        self.font_to = dom::computed_px(&self.nav_brand, "font-size").unwrap_or(self.font_from);
    }

    fn apply(&mut self, p: f32, scroll_y: f32) {
        // Pin: hold the banner visually fixed through the range, then let it
        // trail out slower than the document.
        let offset = self.pin.offset(scroll_y);
        dom::set_transform(&self.hero, &format!("translate3d(0, {offset}px, 0)"));

        let fv = self.flight.value_at(p);
        let scale = if p < self.flight.start {
            self.pop.value_at(p)
        } else {
            self.settle.value_at(p)
        };
        let font = self.font_from + (self.font_to - self.font_from) * fv;
        let (mx, my) = (
            self.snap_m.0 + self.flight_m.dx * fv,
            self.snap_m.1 + self.flight_m.dy * fv,
        );
        let (ax, ay) = (
            self.snap_a.0 + self.flight_a.dx * fv,
            self.snap_a.1 + self.flight_a.dy * fv,
        );
        dom::set_transform(&self.fly_m, &format!("translate({mx}px, {my}px) scale({scale})"));
        dom::set_transform(&self.fly_a, &format!("translate({ax}px, {ay}px) scale({scale})"));
        if font > 0.0 {
            dom::set_style(&self.fly_m, "font-size", &format!("{font}px"));
            dom::set_style(&self.fly_a, "font-size", &format!("{font}px"));
        }

        let fly_opacity = self.fly_in.value_at(p) * self.fly_out.value_at(p);
        dom::set_opacity(&self.fly_m, fly_opacity);
        dom::set_opacity(&self.fly_a, fly_opacity);

        let target_opacity = self.target_out.value_at(p);
        dom::set_opacity(&self.hero_m, target_opacity);
        dom::set_opacity(&self.hero_a, target_opacity);

        dom::set_opacity(&self.nav_brand, self.brand_in.value_at(p));

        for (el, phase) in &self.fade_letters {
            dom::set_opacity(el, phase.value_at(p));
        }
        if let Some(tagline) = &self.tagline {
            dom::set_opacity(tagline, self.tagline_out.value_at(p));
        }
    }
}
