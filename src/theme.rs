//! Accent theming service: owns the session flag read, the accent cycle and
//! the CSS custom property consumers read live.

use web_sys as web;

use crate::constants::{CSS_VAR_ACCENT, SESSION_KEY};
use crate::content::ACCENT_PALETTE;
use crate::core::color::{parse_hex, Rgb};
use crate::core::AccentCycle;
use crate::dom;

pub struct Theme {
    cycle: AccentCycle,
    seen_before: bool,
}

impl Theme {
    /// Read the session flag once, pick the session's starting color and
    /// publish it. Fresh sessions get the default index; reloads sample
    /// uniformly.
    pub fn init(document: &web::Document) -> Self {
        let seen_before = dom::session_flag(SESSION_KEY);
        let cycle = if seen_before {
            AccentCycle::reload(&ACCENT_PALETTE, &mut rand::thread_rng())
        } else {
            dom::set_session_flag(SESSION_KEY);
            AccentCycle::first_load(&ACCENT_PALETTE)
        };
        log::info!(
            "[theme] session seen_before={} accent={} ({})",
            seen_before,
            cycle.index(),
            cycle.color()
        );
        let theme = Self { cycle, seen_before };
        theme.apply(document);
        theme
    }

    fn apply(&self, document: &web::Document) {
        dom::set_css_var(document, CSS_VAR_ACCENT, self.cycle.color());
    }

    /// Advance the cycle by one and publish the new color. Returns the new
    /// index.
    pub fn advance(&mut self, document: &web::Document) -> usize {
        let index = self.cycle.advance();
        self.apply(document);
        log::info!("[theme] accent -> {} ({})", index, self.cycle.color());
        index
    }

    pub fn color(&self) -> &'static str {
        self.cycle.color()
    }

    pub fn rgb(&self) -> Rgb {
        parse_hex(self.cycle.color()).unwrap_or(Rgb {
            r: 160,
            g: 82,
            b: 255,
        })
    }

    pub fn seen_before(&self) -> bool {
        self.seen_before
    }
}
