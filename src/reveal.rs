//! Scroll-scrubbed statement reveal: words fade in staggered across the
//! trigger range, and highlight words recolor toward whatever the accent is
//! at the moment of each update (a live computed-style read, so a menu
//! cycle mid-scroll recolors the rest of the sweep).

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{CSS_VAR_ACCENT, ID_STATEMENT, SELECTOR_HIGHLIGHT, SELECTOR_WORD};
use crate::core::color::{parse_hex, Rgb};
use crate::core::constants::*;
use crate::core::ease::quad_in_out;
use crate::core::{Ease, Phase, ScrollRange};
use crate::dom;
use crate::events;
use crate::frame::Scheduler;
use crate::scroll_binding::ScrollBinding;

struct RevealScene {
    statement: web::HtmlElement,
    words: Vec<(web::HtmlElement, Phase)>,
    highlights: Vec<web::HtmlElement>,
    base: Rgb,
}

pub fn mount(scheduler: &Scheduler, document: &web::Document) {
    let Some(statement) = dom::element_by_id(document, ID_STATEMENT) else {
        return;
    };
    let word_els = dom::query_all(&statement, SELECTOR_WORD);
    let highlights = dom::query_all(&statement, SELECTOR_HIGHLIGHT);
    if word_els.is_empty() && highlights.is_empty() {
        // Nothing to animate is a no-op, not a fault.
        log::debug!("[reveal] no words published, skipping");
        return;
    }

    let count = word_els.len().max(1) as f32;
    let words: Vec<_> = word_els
        .into_iter()
        .enumerate()
        .map(|(i, el)| {
            dom::set_opacity(&el, 0.0);
            let start = i as f32 / count * REVEAL_WORD_SPAN;
            (el, Phase::new(start, REVEAL_WORD_DUR, 0.0, 1.0, Ease::QuadOut))
        })
        .collect();

    let scene = Rc::new(RefCell::new(RevealScene {
        statement,
        words,
        highlights,
        base: parse_hex(REVEAL_BASE_COLOR).unwrap_or(Rgb { r: 27, g: 32, b: 40 }),
    }));

    let scene_apply = scene.clone();
    let document_apply = document.clone();
    let binding = ScrollBinding::new(
        scheduler.clone(),
        range_for(&scene.borrow().statement),
        REVEAL_SCRUB_TAU,
        Box::new(move |progress, _scroll_y| {
            scene_apply.borrow().apply(progress, &document_apply);
        }),
    );

    {
        let binding = binding.clone();
        events::scroll::wire_scroll(move |scroll_y| binding.on_scroll(scroll_y));
    }
    {
        let binding = binding.clone();
        events::scroll::wire_resize(move || {
            let range = range_for(&scene.borrow().statement);
            binding.refresh(range, dom::scroll_y());
        });
    }
    log::info!("[reveal] wired");
}

/// Trigger range from live geometry: the statement enters near the bottom
/// of the viewport and finishes its reveal past the upper third.
fn range_for(statement: &web::HtmlElement) -> ScrollRange {
    let vh = dom::viewport_height();
    let top = dom::rect(statement).top + dom::scroll_y();
    ScrollRange::new(top - vh * REVEAL_START_VH, top - vh * REVEAL_END_VH)
}

impl RevealScene {
    fn apply(&self, p: f32, document: &web::Document) {
        for (el, phase) in &self.words {
            dom::set_opacity(el, phase.value_at(p));
        }
        if self.highlights.is_empty() {
            return;
        }
        // Read the accent at call time: newly revealed words must pick up a
        // color rotated since the timeline was built.
        let accent = dom::css_var(document, CSS_VAR_ACCENT)
            .and_then(|c| parse_hex(&c))
            .unwrap_or(self.base);
        let n = self.highlights.len();
        for (i, el) in self.highlights.iter().enumerate() {
            let delay = if n > 1 {
                i as f32 / (n - 1) as f32 * REVEAL_HIGHLIGHT_STAGGER
            } else {
                0.0
            };
            let adjusted = ((p - delay) / (1.0 - delay)).clamp(0.0, 1.0);
            let color = Rgb::lerp(self.base, accent, quad_in_out(adjusted));
            dom::set_style(el, "color", &color.css());
        }
    }
}
