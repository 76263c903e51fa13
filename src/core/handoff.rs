//! Cross-region handoff: fly a transient element onto a persistent target
//! via a geometry delta computed once, cross-dissolving near the end and
//! signaling downstream exactly once.

use fnv::FnvHashSet;

use super::ease::{self, Ease};

/// Element geometry relative to a shared reference frame. The web layer
/// converts DomRects; the core never touches layout itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// The whole transfer, computed once from rects sampled together. It is
/// deliberately never recomputed mid-flight: a layout shift after sampling
/// produces a small landing error, not a re-aimed flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightDelta {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl FlightDelta {
    pub fn between(source: &Rect, target: &Rect) -> Self {
        let scale = if source.height > f32::EPSILON {
            target.height / source.height
        } else {
            1.0
        };
        Self {
            dx: target.left - source.left,
            dy: target.top - source.top,
            scale,
        }
    }

    /// Transform at eased progress `e`: translation plus scale toward the
    /// target's size.
    pub fn at(&self, e: f32) -> (f32, f32, f32) {
        (
            self.dx * e,
            self.dy * e,
            1.0 + (self.scale - 1.0) * e,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightEvents {
    /// Fired exactly once, a fixed offset before completion.
    pub handoff: bool,
    /// Fired exactly once when the flight lands.
    pub completed: bool,
}

/// Clock for one flight. Steps with frame time; the handoff signal fires
/// when the clock crosses `duration - dissolve` and completion at
/// `duration`, each exactly once regardless of how the clock is stepped.
pub struct HandoffFlight {
    delta: FlightDelta,
    duration: f32,
    dissolve: f32,
    ease: Ease,
    elapsed: f32,
    signaled: bool,
    completed: bool,
}

impl HandoffFlight {
    pub fn new(delta: FlightDelta, duration: f32, dissolve: f32) -> Self {
        Self {
            delta,
            duration: duration.max(0.0),
            dissolve: dissolve.clamp(0.0, duration.max(0.0)),
            ease: Ease::QuartInOut,
            elapsed: 0.0,
            signaled: false,
            completed: false,
        }
    }

    pub fn step(&mut self, dt: f32) -> FlightEvents {
        let mut events = FlightEvents::default();
        if self.completed {
            return events;
        }
        self.elapsed += dt;
        if !self.signaled && self.elapsed >= self.signal_time() {
            self.signaled = true;
            events.handoff = true;
        }
        if self.elapsed >= self.duration {
            self.completed = true;
            events.completed = true;
            if !self.signaled {
                self.signaled = true;
                events.handoff = true;
            }
        }
        events
    }

    fn signal_time(&self) -> f32 {
        (self.duration - self.dissolve).max(0.0)
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Eased progress in [0, 1].
    pub fn eased(&self) -> f32 {
        self.ease.apply(self.progress())
    }

    /// Transform of the flying source element.
    pub fn transform(&self) -> (f32, f32, f32) {
        self.delta.at(self.eased())
    }

    /// Source fades out across the dissolve window so the two instances
    /// overlap without a pop.
    pub fn source_opacity(&self) -> f32 {
        if self.dissolve <= 0.0 {
            return if self.completed { 0.0 } else { 1.0 };
        }
        let t = ((self.elapsed - self.signal_time()) / self.dissolve).clamp(0.0, 1.0);
        1.0 - ease::quad_in(t)
    }

    /// Target fades in across the same window.
    pub fn target_opacity(&self) -> f32 {
        if self.dissolve <= 0.0 {
            return if self.completed { 1.0 } else { 0.0 };
        }
        let t = ((self.elapsed - self.signal_time()) / self.dissolve).clamp(0.0, 1.0);
        ease::quad_out(t)
    }

    pub fn delta(&self) -> FlightDelta {
        self.delta
    }

    pub fn is_done(&self) -> bool {
        self.completed
    }
}

/// Exactly-once bookkeeping for named handoff signals: re-entrant emission
/// attempts are dropped.
#[derive(Default)]
pub struct SignalLedger {
    fired: FnvHashSet<&'static str>,
}

impl SignalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller owns this emission; false if it already happened.
    pub fn try_fire(&mut self, name: &'static str) -> bool {
        self.fired.insert(name)
    }

    pub fn has_fired(&self, name: &str) -> bool {
        self.fired.contains(name)
    }
}
