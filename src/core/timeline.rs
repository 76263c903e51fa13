//! Progress-driven timelines: phases evaluated against a normalized (or
//! absolute-time) progress value, scroll-range mapping, scrub smoothing and
//! pinned regions.
//!
//! Phases are independent of wall-clock time; a timeline only ever sees a
//! progress value, whether that comes from a scroll position or an elapsed
//! clock.

use smallvec::SmallVec;

use super::constants::SCRUB_SETTLE_EPS;
use super::ease::Ease;

/// One animation step in a timeline's own coordinate space. Outside its
/// [start, start + duration] window the phase clamps to its boundary value.
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub start: f32,
    pub duration: f32,
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
}

impl Phase {
    pub fn new(start: f32, duration: f32, from: f32, to: f32, ease: Ease) -> Self {
        Self {
            start,
            duration,
            from,
            to,
            ease,
        }
    }

    pub fn value_at(&self, progress: f32) -> f32 {
        let t = if self.duration <= 0.0 {
            // Degenerate phase: a step at `start`.
            if progress < self.start {
                0.0
            } else {
                1.0
            }
        } else {
            ((progress - self.start) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhaseId(usize);

/// An ordered set of phases. Phases may overlap and run concurrently within
/// one progress update; iteration order for whole-timeline evaluation is
/// start-offset ascending (stable for ties), so a later-starting phase wins
/// when two write the same property.
#[derive(Clone, Default)]
pub struct Timeline {
    phases: SmallVec<[Phase; 8]>,
    sorted: SmallVec<[usize; 8]>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, phase: Phase) -> PhaseId {
        let id = self.phases.len();
        self.phases.push(phase);
        self.sorted.push(id);
        let phases = &self.phases;
        self.sorted
            .sort_by(|&a, &b| phases[a].start.total_cmp(&phases[b].start).then(a.cmp(&b)));
        PhaseId(id)
    }

    pub fn value(&self, id: PhaseId, progress: f32) -> f32 {
        self.phases[id.0].value_at(progress)
    }

    /// Visit every phase in start-ascending order with its value at
    /// `progress`.
    pub fn for_each_sorted(&self, progress: f32, mut f: impl FnMut(PhaseId, f32)) {
        for &i in &self.sorted {
            f(PhaseId(i), self.phases[i].value_at(progress));
        }
    }

    /// Largest phase end; the natural duration for absolute-time timelines.
    pub fn span(&self) -> f32 {
        self.phases.iter().map(Phase::end).fold(0.0, f32::max)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// A document-space scroll interval mapped to [0, 1] progress. Progress is
/// monotonic with scroll position inside the interval and holds at the
/// boundary value outside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn progress(&self, scroll_y: f32) -> f32 {
        if self.end <= self.start {
            return if scroll_y >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }
}

/// Low-pass filter between raw scroll progress and rendered progress, so
/// fast wheel input doesn't jitter. `tau` is the catch-up time constant;
/// zero snaps.
#[derive(Clone, Copy, Debug)]
pub struct Scrub {
    pub value: f32,
    pub tau: f32,
}

impl Scrub {
    pub fn new(tau: f32) -> Self {
        Self { value: 0.0, tau }
    }

    pub fn snap(&mut self, value: f32) {
        self.value = value;
    }

    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        if self.tau <= 0.0 {
            self.value = target;
        } else {
            let alpha = 1.0 - (-dt / self.tau).exp();
            self.value += (target - self.value) * alpha;
            if (target - self.value).abs() < SCRUB_SETTLE_EPS {
                self.value = target;
            }
        }
        self.value
    }

    pub fn settled(&self, target: f32) -> bool {
        (target - self.value).abs() < SCRUB_SETTLE_EPS
    }
}

/// Holds a region visually fixed while its scroll range plays out, releasing
/// at progress 1, optionally continuing at a slower-than-scroll parallax
/// rate for a trailing segment.
#[derive(Clone, Copy, Debug)]
pub struct Pin {
    pub range: ScrollRange,
    pub trail_rate: f32,
    pub trail_length: f32,
}

impl Pin {
    pub fn new(range: ScrollRange) -> Self {
        Self {
            range,
            trail_rate: 0.0,
            trail_length: 0.0,
        }
    }

    pub fn with_parallax(range: ScrollRange, rate: f32, length: f32) -> Self {
        Self {
            range,
            trail_rate: rate,
            trail_length: length.max(0.0),
        }
    }

    /// Translation (in scroll direction) keeping the region apparently fixed
    /// for the duration of the range.
    pub fn offset(&self, scroll_y: f32) -> f32 {
        let held = (scroll_y - self.range.start).clamp(0.0, self.range.length());
        if scroll_y <= self.range.end || self.trail_length <= 0.0 {
            return held;
        }
        let over = (scroll_y - self.range.end).min(self.trail_length);
        held + over * self.trail_rate
    }

    pub fn released(&self, scroll_y: f32) -> bool {
        self.range.progress(scroll_y) >= 1.0
    }
}
