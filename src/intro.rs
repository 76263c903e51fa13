//! Intro overlay: greeting flash, initials reveal, then the handoff flight
//! that carries the initials onto the hero heading anchors.
//!
//! The sequence owns the scroll lock for its duration and talks to the rest
//! of the page only through the handoff bus: `intro-handoff` fires exactly
//! once at the cross-dissolve point (even when the targets are missing),
//! `intro-complete` once the overlay is gone.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    ID_INTRO_A, ID_INTRO_INITIALS, ID_INTRO_M, ID_INTRO_OVERLAY, ID_HERO_A, ID_HERO_M,
    SELECTOR_GREETING, SIGNAL_INTRO_COMPLETE, SIGNAL_INTRO_HANDOFF,
};
use crate::core::constants::*;
use crate::core::{
    Ease, FlightDelta, HandoffFlight, Phase, SignalLedger, Timeline,
};
use crate::dom;
use crate::frame::Scheduler;

enum Stage {
    Greetings,
    Reveal,
    Flight {
        flight: HandoffFlight,
        delta_a: FlightDelta,
        targets: Option<(web::HtmlElement, web::HtmlElement)>,
    },
}

struct IntroSeq {
    stage: Stage,
    elapsed: f32,
    overlay: web::HtmlElement,
    greetings: Vec<web::HtmlElement>,
    initials: web::HtmlElement,
    letter_m: web::HtmlElement,
    letter_a: web::HtmlElement,
    reveal_tl: Timeline,
    reveal_scale: crate::core::PhaseId,
    reveal_opacity: crate::core::PhaseId,
    reveal_blur: crate::core::PhaseId,
    bg_fade: Phase,
    ledger: SignalLedger,
}

/// Mount and start the intro, or skip it entirely: when the session already
/// saw it (or the overlay isn't published) both signals fire immediately so
/// downstream regions never stall.
pub fn mount(scheduler: &Scheduler, document: &web::Document, seen_before: bool) {
    let overlay = dom::element_by_id(document, ID_INTRO_OVERLAY);
    let initials = dom::element_by_id(document, ID_INTRO_INITIALS);
    let letter_m = dom::element_by_id(document, ID_INTRO_M);
    let letter_a = dom::element_by_id(document, ID_INTRO_A);

    let (Some(overlay), Some(initials), Some(letter_m), Some(letter_a)) =
        (overlay, initials, letter_m, letter_a)
    else {
        log::warn!("[intro] overlay elements missing, skipping sequence");
        skip();
        return;
    };
    if seen_before {
        dom::set_style(&overlay, "display", "none");
        log::info!("[intro] session replay, skipping sequence");
        skip();
        return;
    }

    let greetings = dom::query_all(&overlay, SELECTOR_GREETING);
    for g in &greetings {
        dom::set_opacity(g, 0.0);
    }
    dom::set_opacity(&initials, 0.0);

    // Initials reveal: scale/blur/opacity phases over absolute seconds.
    let mut reveal_tl = Timeline::new();
    let reveal_scale = reveal_tl.add(Phase::new(0.0, INTRO_REVEAL_SEC, 1.2, 1.0, Ease::QuadOut));
    let reveal_opacity = reveal_tl.add(Phase::new(0.0, INTRO_REVEAL_SEC, 0.0, 1.0, Ease::QuadOut));
    let reveal_blur = reveal_tl.add(Phase::new(0.0, INTRO_REVEAL_SEC, 5.0, 0.0, Ease::QuadOut));

    dom::lock_scroll(document);

    let seq = Rc::new(RefCell::new(IntroSeq {
        stage: Stage::Greetings,
        elapsed: 0.0,
        overlay,
        greetings,
        initials,
        letter_m,
        letter_a,
        reveal_tl,
        reveal_scale,
        reveal_opacity,
        reveal_blur,
        bg_fade: Phase::new(0.4, INTRO_BG_FADE_SEC, 1.0, 0.0, Ease::QuadInOut),
        ledger: SignalLedger::new(),
    }));

    let handle: Rc<RefCell<Option<crate::core::TickerHandle>>> = Rc::new(RefCell::new(None));
    let handle_in_tick = handle.clone();
    let scheduler_in_tick = scheduler.clone();
    let document = document.clone();
    let h = scheduler.register(Box::new(move |dt| {
        let done = seq.borrow_mut().step(dt, &document);
        if done {
            if let Some(h) = handle_in_tick.borrow_mut().take() {
                scheduler_in_tick.unregister(h);
            }
        }
    }));
    *handle.borrow_mut() = Some(h);
    log::info!("[intro] sequence started");
}

fn skip() {
    dom::dispatch(SIGNAL_INTRO_HANDOFF);
    dom::dispatch(SIGNAL_INTRO_COMPLETE);
}

impl IntroSeq {
    /// Advance one frame; returns true once the sequence has torn down.
    fn step(&mut self, dt: f32, document: &web::Document) -> bool {
        self.elapsed += dt;
        // Take the stage out so transitions don't fight the borrow.
        match std::mem::replace(&mut self.stage, Stage::Greetings) {
            Stage::Greetings => {
                let total = self.greetings.len() as f32 * INTRO_FLASH_SEC;
                let idx = (self.elapsed / INTRO_FLASH_SEC) as usize;
                for (i, g) in self.greetings.iter().enumerate() {
                    dom::set_opacity(g, if i == idx { 1.0 } else { 0.0 });
                }
                if self.elapsed >= total || self.greetings.is_empty() {
                    for g in &self.greetings {
                        dom::set_opacity(g, 0.0);
                    }
                    self.elapsed = 0.0;
                    self.stage = Stage::Reveal;
                }
                false
            }
            Stage::Reveal => {
                let p = self.elapsed;
                let scale = self.reveal_tl.value(self.reveal_scale, p);
                let opacity = self.reveal_tl.value(self.reveal_opacity, p);
                let blur = self.reveal_tl.value(self.reveal_blur, p);
                dom::set_transform(&self.initials, &format!("scale({scale})"));
                dom::set_opacity(&self.initials, opacity);
                dom::set_style(&self.initials, "filter", &format!("blur({blur}px)"));
                if p >= INTRO_REVEAL_SEC + INTRO_HOLD_SEC {
                    self.elapsed = 0.0;
                    self.begin_flight(document);
                } else {
                    self.stage = Stage::Reveal;
                }
                false
            }
            Stage::Flight {
                mut flight,
                delta_a,
                targets,
            } => {
                let events = flight.step(dt);
                let e = flight.eased();
                let (mx, my, ms) = flight.transform();
                dom::set_transform(
                    &self.letter_m,
                    &format!("translate({mx}px, {my}px) scale({ms})"),
                );
                let (ax, ay, asc) = delta_a.at(e);
                dom::set_transform(
                    &self.letter_a,
                    &format!("translate({ax}px, {ay}px) scale({asc})"),
                );
                let source_opacity = flight.source_opacity();
                dom::set_opacity(&self.letter_m, source_opacity);
                dom::set_opacity(&self.letter_a, source_opacity);
                if let Some((tm, ta)) = &targets {
                    let target_opacity = flight.target_opacity();
                    dom::set_opacity(tm, target_opacity);
                    dom::set_opacity(ta, target_opacity);
                }
                let bg = self.bg_fade.value_at(flight.progress() * INTRO_FLIGHT_SEC);
                dom::set_style(
                    &self.overlay,
                    "background-color",
                    &format!("rgba(255, 255, 255, {bg})"),
                );
                if events.handoff && self.ledger.try_fire(SIGNAL_INTRO_HANDOFF) {
                    dom::dispatch(SIGNAL_INTRO_HANDOFF);
                }
                let done = events.completed;
                if done {
                    self.finish(document);
                }
                self.stage = Stage::Flight {
                    flight,
                    delta_a,
                    targets,
                };
                done
            }
        }
    }

    fn begin_flight(&mut self, document: &web::Document) {
        let target_m = dom::element_by_id(document, ID_HERO_M);
        let target_a = dom::element_by_id(document, ID_HERO_A);
        let (Some(target_m), Some(target_a)) = (target_m, target_a) else {
            // Degrade gracefully: no geometry to fly through. The degenerate
            // zero-length flight below completes on the next frame and still
            // emits the handoff signal, so nothing downstream deadlocks.
            log::warn!("[intro] handoff targets missing, signaling without flight");
            let unit = FlightDelta {
                dx: 0.0,
                dy: 0.0,
                scale: 1.0,
            };
            self.stage = Stage::Flight {
                flight: HandoffFlight::new(unit, 0.0, 0.0),
                delta_a: unit,
                targets: None,
            };
            return;
        };

        // All four rects in one batch: measuring source and target against
        // the same layout keeps the delta coherent.
        let source_m = dom::rect(&self.letter_m);
        let source_a = dom::rect(&self.letter_a);
        let rect_m = dom::rect(&target_m);
        let rect_a = dom::rect(&target_a);
        let delta_m = FlightDelta::between(&source_m, &rect_m);
        let delta_a = FlightDelta::between(&source_a, &rect_a);
        dom::set_opacity(&target_m, 0.0);
        dom::set_opacity(&target_a, 0.0);
        self.stage = Stage::Flight {
            flight: HandoffFlight::new(delta_m, INTRO_FLIGHT_SEC, INTRO_DISSOLVE_SEC),
            delta_a,
            targets: Some((target_m, target_a)),
        };
        log::info!(
            "[intro] flight started (dx={:.1} dy={:.1} scale={:.2})",
            delta_m.dx,
            delta_m.dy,
            delta_m.scale
        );
    }

    fn finish(&mut self, document: &web::Document) {
        dom::set_style(&self.overlay, "display", "none");
        dom::unlock_scroll(document);
        if self.ledger.try_fire(SIGNAL_INTRO_COMPLETE) {
            dom::dispatch(SIGNAL_INTRO_COMPLETE);
        }
        log::info!("[intro] complete");
    }
}
