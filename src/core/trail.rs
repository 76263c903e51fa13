//! Pointer trail: a chain of markers, each exponentially smoothing toward
//! the marker ahead of it (the first toward the head), plus the collapse
//! "burst" played after sustained pointer inactivity.

use glam::Vec2;
use smallvec::SmallVec;

use super::constants::*;
use super::ease;

#[derive(Clone, Copy, Debug)]
pub struct TrailMarker {
    pub pos: Vec2,
    /// Chain smoothing factor; strictly decreasing along the chain so each
    /// marker lags the one ahead of it.
    pub lerp: f32,
    pub scale: f32,
    pub opacity: f32,
    scale_target: f32,
    opacity_target: f32,
    burst_from: Vec2,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrailMode {
    Visible,
    /// The pointer indicator becomes a masking effect elsewhere: trail and
    /// head fade out and bursts are disarmed. Entered and exited only by the
    /// owning coordinator.
    Spotlight,
}

pub struct Trail {
    markers: SmallVec<[TrailMarker; 4]>,
    mode: TrailMode,
    hover: bool,
    // Burst clock; Some while a burst is playing or has finished. Retriggers
    // are no-ops until movement re-arms the trail.
    burst_t: Option<f32>,
    armed: bool,
    head_scale: f32,
    head_scale_target: f32,
    head_opacity: f32,
    head_opacity_target: f32,
}

impl Trail {
    pub fn new(lerps: &[f32]) -> Self {
        debug_assert!(
            lerps.windows(2).all(|w| w[0] > w[1]),
            "chain smoothing factors must strictly decrease"
        );
        let markers = lerps
            .iter()
            .map(|&lerp| TrailMarker {
                pos: Vec2::ZERO,
                lerp,
                scale: 1.0,
                opacity: 0.0,
                scale_target: 1.0,
                opacity_target: 0.0,
                burst_from: Vec2::ZERO,
            })
            .collect();
        Self {
            markers,
            mode: TrailMode::Visible,
            hover: false,
            burst_t: None,
            armed: false,
            head_scale: 1.0,
            head_scale_target: 1.0,
            head_opacity: 0.0,
            head_opacity_target: 0.0,
        }
    }

    /// Advance one frame. `head` is the smoothed pointer position; chain
    /// order is strict, marker i reads marker i-1's position updated this
    /// same frame.
    pub fn step(&mut self, dt: f32, head: Vec2) {
        let k = 1.0 - (-dt / TRAIL_TWEEN_TAU).exp();

        match self.burst_t {
            Some(t) => {
                let t = (t + dt).min(self.burst_total());
                self.burst_t = Some(t);
                for (i, m) in self.markers.iter_mut().enumerate() {
                    let local = ((t - i as f32 * TRAIL_BURST_STAGGER) / TRAIL_BURST_DURATION)
                        .clamp(0.0, 1.0);
                    m.pos = m.burst_from.lerp(head, ease::cubic_in(local));
                }
                self.head_scale = head_pulse_scale(t);
            }
            None => {
                let mut target = head;
                for m in self.markers.iter_mut() {
                    m.pos += (target - m.pos) * m.lerp;
                    target = m.pos;
                }
                self.head_scale += (self.head_scale_target - self.head_scale) * k;
            }
        }

        for m in self.markers.iter_mut() {
            m.scale += (m.scale_target - m.scale) * k;
            m.opacity += (m.opacity_target - m.opacity) * k;
        }
        self.head_opacity += (self.head_opacity_target - self.head_opacity) * k;
    }

    /// Qualifying pointer movement: show the trail, cancel any burst and
    /// re-arm the next one.
    pub fn notify_movement(&mut self) {
        if self.mode == TrailMode::Spotlight {
            return;
        }
        self.burst_t = None;
        self.armed = true;
        self.head_opacity_target = 1.0;
        let scale = self.marker_hover_scale();
        for m in self.markers.iter_mut() {
            m.opacity_target = 1.0;
            m.scale_target = scale;
        }
    }

    /// Collapse the chain into the head. Idempotent: retriggering while a
    /// burst is in progress (or before movement re-arms) is a no-op.
    pub fn trigger_burst(&mut self) -> bool {
        if self.mode == TrailMode::Spotlight || !self.armed || self.burst_t.is_some() {
            return false;
        }
        self.armed = false;
        self.burst_t = Some(0.0);
        for m in self.markers.iter_mut() {
            m.burst_from = m.pos;
            m.scale_target = 0.0;
            m.opacity_target = 0.0;
        }
        true
    }

    pub fn set_mode(&mut self, mode: TrailMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            TrailMode::Spotlight => {
                self.burst_t = None;
                self.armed = false;
                self.head_opacity_target = 0.0;
                for m in self.markers.iter_mut() {
                    m.opacity_target = 0.0;
                }
            }
            TrailMode::Visible => {
                // Markers stay hidden until the next qualifying movement.
                self.head_opacity_target = 1.0;
            }
        }
    }

    /// Window leave/enter visibility. Markers re-show on the next movement;
    /// spotlight keeps everything hidden regardless.
    pub fn set_visible(&mut self, visible: bool) {
        if self.mode == TrailMode::Spotlight {
            return;
        }
        if visible {
            self.head_opacity_target = 1.0;
        } else {
            self.head_opacity_target = 0.0;
            for m in self.markers.iter_mut() {
                m.opacity_target = 0.0;
            }
        }
    }

    /// Link-hover growth on the head and chain.
    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
        self.head_scale_target = if hover { TRAIL_HOVER_HEAD_SCALE } else { 1.0 };
        if self.burst_t.is_none() {
            let scale = self.marker_hover_scale();
            for m in self.markers.iter_mut() {
                if m.opacity_target > 0.0 {
                    m.scale_target = scale;
                }
            }
        }
    }

    /// Snap the whole chain to a position (first movement, window re-entry).
    pub fn snap_to(&mut self, pos: Vec2) {
        for m in self.markers.iter_mut() {
            m.pos = pos;
            m.burst_from = pos;
        }
    }

    pub fn markers(&self) -> &[TrailMarker] {
        &self.markers
    }

    pub fn mode(&self) -> TrailMode {
        self.mode
    }

    pub fn is_bursting(&self) -> bool {
        self.burst_t.is_some()
    }

    pub fn head_scale(&self) -> f32 {
        self.head_scale
    }

    pub fn head_opacity(&self) -> f32 {
        self.head_opacity
    }

    fn marker_hover_scale(&self) -> f32 {
        if self.hover {
            TRAIL_HOVER_MARKER_SCALE
        } else {
            1.0
        }
    }

    fn burst_total(&self) -> f32 {
        let chain = (self.markers.len().saturating_sub(1)) as f32 * TRAIL_BURST_STAGGER
            + TRAIL_BURST_DURATION;
        let head = TRAIL_BURST_HEAD_DELAY + TRAIL_BURST_HEAD_RISE + TRAIL_BURST_HEAD_SETTLE;
        chain.max(head)
    }
}

/// Head pulse while the chain merges: brief overshoot, then elastic settle.
fn head_pulse_scale(t: f32) -> f32 {
    let t = t - TRAIL_BURST_HEAD_DELAY;
    if t <= 0.0 {
        1.0
    } else if t < TRAIL_BURST_HEAD_RISE {
        1.0 + (TRAIL_BURST_HEAD_PEAK - 1.0) * ease::quad_out(t / TRAIL_BURST_HEAD_RISE)
    } else {
        let s = ((t - TRAIL_BURST_HEAD_RISE) / TRAIL_BURST_HEAD_SETTLE).clamp(0.0, 1.0);
        TRAIL_BURST_HEAD_PEAK + (1.0 - TRAIL_BURST_HEAD_PEAK) * ease::elastic_out(s)
    }
}
