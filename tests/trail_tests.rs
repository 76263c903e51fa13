// Host-side tests for the pointer trail chain and burst behavior.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/ease.rs"]
mod ease;
#[path = "../src/core/trail.rs"]
mod trail;

use constants::TRAIL_LERPS;
use trail::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn moving_trail() -> Trail {
    let mut trail = Trail::new(&TRAIL_LERPS);
    trail.snap_to(Vec2::ZERO);
    trail.notify_movement();
    trail
}

#[test]
fn chain_lags_increase_along_the_chain() {
    let mut trail = moving_trail();
    // Sweep the head right; each marker must trail the one ahead of it.
    let mut head = Vec2::ZERO;
    for _ in 0..60 {
        head.x += 5.0;
        trail.step(DT, head);
    }
    let markers = trail.markers();
    assert!(markers[0].pos.x < head.x);
    for pair in markers.windows(2) {
        assert!(
            pair[1].pos.x < pair[0].pos.x,
            "marker behind must lag marker ahead"
        );
    }
}

#[test]
fn chain_reads_freshly_updated_predecessor() {
    let mut trail = moving_trail();
    let head = Vec2::new(100.0, 0.0);
    trail.step(DT, head);
    let markers = trail.markers();
    // Marker 1's single-step displacement reflects marker 0's already
    // updated position, not its previous one (which was the snap origin).
    let expected_first = 100.0 * markers[0].lerp;
    assert!((markers[0].pos.x - expected_first).abs() < 1e-3);
    let expected_second = markers[0].pos.x * markers[1].lerp;
    assert!((markers[1].pos.x - expected_second).abs() < 1e-3);
}

#[test]
fn movement_reveals_markers() {
    let mut trail = moving_trail();
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
    }
    assert!(trail.head_opacity() > 0.95);
    for m in trail.markers() {
        assert!(m.opacity > 0.95);
    }
}

#[test]
fn burst_is_armed_by_movement_and_idempotent() {
    let mut trail = moving_trail();
    assert!(trail.trigger_burst());
    assert!(trail.is_bursting());
    // Retrigger while in progress is a no-op.
    assert!(!trail.trigger_burst());
    // Still a no-op after the burst has fully played out.
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
    }
    assert!(!trail.trigger_burst());
    // Movement cancels and re-arms.
    trail.notify_movement();
    assert!(!trail.is_bursting());
    assert!(trail.trigger_burst());
}

#[test]
fn burst_collapses_markers_into_the_head() {
    let mut trail = moving_trail();
    let head = Vec2::new(50.0, 20.0);
    for _ in 0..120 {
        trail.step(DT, head);
    }
    assert!(trail.trigger_burst());
    for _ in 0..120 {
        trail.step(DT, head);
    }
    for m in trail.markers() {
        assert!(m.pos.distance(head) < 1.0, "marker collapsed into head");
        assert!(m.opacity < 0.05);
        assert!(m.scale < 0.05);
    }
    // The head pulse has settled back to rest scale.
    assert!((trail.head_scale() - 1.0).abs() < 0.05);
}

#[test]
fn head_pulses_during_burst() {
    let mut trail = moving_trail();
    for _ in 0..30 {
        trail.step(DT, Vec2::ZERO);
    }
    trail.trigger_burst();
    let mut peak = 1.0f32;
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
        peak = peak.max(trail.head_scale());
    }
    assert!(peak > 1.3, "merge pulse overshoots, got {peak}");
}

#[test]
fn spotlight_suppresses_trail_and_burst() {
    let mut trail = moving_trail();
    for _ in 0..60 {
        trail.step(DT, Vec2::ZERO);
    }
    trail.set_mode(TrailMode::Spotlight);
    assert!(!trail.trigger_burst(), "burst disarmed in spotlight");
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
    }
    assert!(trail.head_opacity() < 0.05);
    for m in trail.markers() {
        assert!(m.opacity < 0.05);
    }
    // Movement notifications are ignored until the owner exits spotlight.
    trail.notify_movement();
    assert!(!trail.trigger_burst());

    trail.set_mode(TrailMode::Visible);
    trail.notify_movement();
    assert!(trail.trigger_burst());
}

#[test]
fn hover_grows_the_head() {
    let mut trail = moving_trail();
    trail.set_hover(true);
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
    }
    assert!(trail.head_scale() > 1.8);
    trail.set_hover(false);
    for _ in 0..120 {
        trail.step(DT, Vec2::ZERO);
    }
    assert!((trail.head_scale() - 1.0).abs() < 0.05);
}
