//! Accent color cycle: one palette index per browser session.
//!
//! First load of a session uses the configured default; reloads within the
//! session sample uniformly; each menu open/close cycle advances the index
//! by exactly one, wrapping around the palette.

use rand::Rng;

use super::constants::ACCENT_DEFAULT_INDEX;

pub struct AccentCycle {
    palette: &'static [&'static str],
    index: usize,
}

impl AccentCycle {
    /// Fresh session: deterministic default index.
    pub fn first_load(palette: &'static [&'static str]) -> Self {
        debug_assert!(!palette.is_empty());
        Self {
            palette,
            index: ACCENT_DEFAULT_INDEX.min(palette.len().saturating_sub(1)),
        }
    }

    /// Reload within an existing session: uniform sample over the palette.
    pub fn reload<R: Rng>(palette: &'static [&'static str], rng: &mut R) -> Self {
        debug_assert!(!palette.is_empty());
        Self {
            palette,
            index: rng.gen_range(0..palette.len()),
        }
    }

    /// Advance by one, wrapping. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.palette.len();
        self.index
    }

    pub fn color(&self) -> &'static str {
        self.palette[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn palette(&self) -> &'static [&'static str] {
        self.palette
    }
}
