//! Smoothed pointer representation shared by the trail and the field.

use glam::Vec2;

use super::constants::*;

/// Raw and smoothed pointer position with movement/idle detection.
///
/// `moving` flips true on a >2 px delta between input samples and reverts
/// after the quiet window expires; expiry is the only way idle is entered.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub moving: bool,
    last_sample: Vec2,
    quiet_sec: f32,
    initialized: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            moving: false,
            last_sample: Vec2::ZERO,
            quiet_sec: 0.0,
            initialized: false,
        }
    }

    /// Feed one input sample. Returns true if the sample counts as movement.
    pub fn sample(&mut self, pos: Vec2) -> bool {
        if !self.initialized {
            // First sample snaps everything so the trail doesn't streak in
            // from the origin.
            self.reset(pos);
            return false;
        }
        let delta = pos.distance(self.last_sample);
        self.last_sample = pos;
        self.raw = pos;
        if delta > POINTER_MOVE_THRESHOLD_PX {
            self.moving = true;
            self.quiet_sec = 0.0;
            return true;
        }
        false
    }

    /// Advance smoothing and the quiet timer by one frame.
    pub fn step(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        self.smoothed += (self.raw - self.smoothed) * POINTER_SMOOTHING;
        self.quiet_sec += dt;
        if self.moving && self.quiet_sec >= POINTER_QUIET_SEC {
            self.moving = false;
        }
    }

    /// Re-snap on window re-entry so the cursor doesn't fly across the page.
    pub fn reset(&mut self, pos: Vec2) {
        self.raw = pos;
        self.smoothed = pos;
        self.last_sample = pos;
        self.moving = false;
        self.quiet_sec = 0.0;
        self.initialized = true;
    }

    pub fn has_moved(&self) -> bool {
        self.initialized
    }

    /// No qualifying sample within `window` seconds. Never true before the
    /// first sample.
    pub fn is_idle(&self, window: f32) -> bool {
        self.initialized && self.quiet_sec >= window
    }
}
