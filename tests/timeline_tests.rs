// Host-side tests for phases, scroll ranges, scrub and pinning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/ease.rs"]
mod ease;
#[path = "../src/core/timeline.rs"]
mod timeline;

use ease::Ease;
use timeline::*;

#[test]
fn phase_clamps_outside_its_window() {
    let phase = Phase::new(0.2, 0.4, 10.0, 30.0, Ease::Linear);
    assert_eq!(phase.value_at(0.0), 10.0);
    assert_eq!(phase.value_at(0.2), 10.0);
    assert_eq!(phase.value_at(0.4), 20.0);
    assert_eq!(phase.value_at(0.6), 30.0);
    assert_eq!(phase.value_at(1.0), 30.0);
}

#[test]
fn zero_duration_phase_is_a_step() {
    let phase = Phase::new(0.5, 0.0, 0.0, 1.0, Ease::Linear);
    assert_eq!(phase.value_at(0.49), 0.0);
    assert_eq!(phase.value_at(0.5), 1.0);
    assert_eq!(phase.value_at(1.0), 1.0);
}

#[test]
fn overlapping_phases_evaluate_independently() {
    let mut tl = Timeline::new();
    let a = tl.add(Phase::new(0.0, 0.6, 0.0, 1.0, Ease::Linear));
    let b = tl.add(Phase::new(0.4, 0.6, 100.0, 0.0, Ease::Linear));
    assert!((tl.value(a, 0.5) - 0.8333).abs() < 1e-3);
    assert!((tl.value(b, 0.5) - 83.333).abs() < 1e-2);
}

#[test]
fn whole_timeline_iteration_is_start_ascending() {
    let mut tl = Timeline::new();
    // Distinct end values tag each phase; insertion order is shuffled.
    tl.add(Phase::new(0.5, 0.1, 0.0, 30.0, Ease::Linear));
    tl.add(Phase::new(0.0, 0.1, 0.0, 10.0, Ease::Linear));
    tl.add(Phase::new(0.25, 0.1, 0.0, 20.0, Ease::Linear));
    let mut visited = Vec::new();
    tl.for_each_sorted(1.0, |_, v| visited.push(v));
    assert_eq!(visited, vec![10.0, 20.0, 30.0]);
    assert!((tl.span() - 0.6).abs() < 1e-6);
}

#[test]
fn scroll_range_maps_linearly_and_holds_outside() {
    let range = ScrollRange::new(1000.0, 2000.0);
    assert_eq!(range.progress(0.0), 0.0);
    assert_eq!(range.progress(1000.0), 0.0);
    assert_eq!(range.progress(1500.0), 0.5);
    assert_eq!(range.progress(2000.0), 1.0);
    assert_eq!(range.progress(5000.0), 1.0);
}

#[test]
fn pinned_viewport_range_midpoint_is_half_progress() {
    // Trigger region one viewport tall, pinned, range of one viewport:
    // scrolling exactly half the range yields progress 0.5.
    let vh = 900.0;
    let range = ScrollRange::new(0.0, vh);
    let pin = Pin::new(range);
    assert_eq!(range.progress(vh * 0.5), 0.5);
    assert_eq!(pin.offset(vh * 0.5), vh * 0.5);
    assert!(!pin.released(vh * 0.5));
}

#[test]
fn pin_holds_then_releases() {
    let pin = Pin::new(ScrollRange::new(100.0, 500.0));
    assert_eq!(pin.offset(0.0), 0.0);
    assert_eq!(pin.offset(300.0), 200.0);
    assert_eq!(pin.offset(500.0), 400.0);
    // Released: the offset stops growing and document flow resumes.
    assert_eq!(pin.offset(900.0), 400.0);
    assert!(pin.released(500.0));
    assert!(!pin.released(499.0));
}

#[test]
fn pin_parallax_continues_slower_than_scroll() {
    let pin = Pin::with_parallax(ScrollRange::new(0.0, 400.0), 0.3, 200.0);
    assert_eq!(pin.offset(400.0), 400.0);
    // 100px past release moves the region 30px.
    assert!((pin.offset(500.0) - 430.0).abs() < 1e-3);
    // The trailing segment is bounded.
    assert!((pin.offset(10_000.0) - 460.0).abs() < 1e-3);
}

#[test]
fn scrub_lags_then_converges() {
    let mut scrub = Scrub::new(0.5);
    let first = scrub.step(1.0, 1.0 / 60.0);
    assert!(first > 0.0 && first < 0.1, "high smoothing lags, got {first}");
    for _ in 0..600 {
        scrub.step(1.0, 1.0 / 60.0);
    }
    assert_eq!(scrub.value, 1.0);
    assert!(scrub.settled(1.0));
}

#[test]
fn zero_tau_scrub_snaps() {
    let mut scrub = Scrub::new(0.0);
    assert_eq!(scrub.step(0.7, 1.0 / 60.0), 0.7);
    assert!(scrub.settled(0.7));
}

#[test]
fn higher_tau_means_more_lag() {
    let mut fast = Scrub::new(0.2);
    let mut slow = Scrub::new(2.0);
    for _ in 0..30 {
        fast.step(1.0, 1.0 / 60.0);
        slow.step(1.0, 1.0 / 60.0);
    }
    assert!(slow.value < fast.value);
}
