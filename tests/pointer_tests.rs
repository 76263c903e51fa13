// Host-side tests for pointer tracking and idle detection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/pointer.rs"]
mod pointer;

use constants::{POINTER_MOVE_THRESHOLD_PX, POINTER_QUIET_SEC};
use pointer::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

#[test]
fn first_sample_snaps_without_counting_as_movement() {
    let mut tracker = PointerTracker::new();
    assert!(!tracker.has_moved());
    let moved = tracker.sample(Vec2::new(400.0, 300.0));
    assert!(!moved);
    assert!(tracker.has_moved());
    assert_eq!(tracker.smoothed, tracker.raw);
    assert!(!tracker.moving);
}

#[test]
fn small_jitter_does_not_flip_moving() {
    let mut tracker = PointerTracker::new();
    tracker.sample(Vec2::new(100.0, 100.0));
    let moved = tracker.sample(Vec2::new(100.0 + POINTER_MOVE_THRESHOLD_PX * 0.5, 100.0));
    assert!(!moved);
    assert!(!tracker.moving);
}

#[test]
fn movement_flips_flag_and_quiet_window_reverts_it() {
    let mut tracker = PointerTracker::new();
    tracker.sample(Vec2::new(100.0, 100.0));
    assert!(tracker.sample(Vec2::new(110.0, 100.0)));
    assert!(tracker.moving);
    // Each qualifying sample resets the quiet timer.
    tracker.step(POINTER_QUIET_SEC * 0.8);
    tracker.sample(Vec2::new(120.0, 100.0));
    tracker.step(POINTER_QUIET_SEC * 0.8);
    assert!(tracker.moving);
    // Expiry is the only path into idle.
    tracker.step(POINTER_QUIET_SEC);
    assert!(!tracker.moving);
}

#[test]
fn smoothed_position_converges_to_raw() {
    let mut tracker = PointerTracker::new();
    tracker.sample(Vec2::ZERO);
    tracker.sample(Vec2::new(200.0, 0.0));
    let mut last_distance = f32::MAX;
    for _ in 0..120 {
        tracker.step(DT);
        let d = tracker.smoothed.distance(tracker.raw);
        assert!(d <= last_distance);
        last_distance = d;
    }
    assert!(last_distance < 1.0);
}

#[test]
fn idle_requires_a_first_sample() {
    let mut tracker = PointerTracker::new();
    tracker.step(10.0);
    assert!(!tracker.is_idle(1.0), "never idle before the pointer exists");
    tracker.sample(Vec2::ZERO);
    tracker.step(10.0);
    assert!(tracker.is_idle(1.0));
}

#[test]
fn reset_snaps_and_clears_movement() {
    let mut tracker = PointerTracker::new();
    tracker.sample(Vec2::ZERO);
    tracker.sample(Vec2::new(500.0, 0.0));
    assert!(tracker.moving);
    tracker.reset(Vec2::new(50.0, 60.0));
    assert!(!tracker.moving);
    assert_eq!(tracker.raw, Vec2::new(50.0, 60.0));
    assert_eq!(tracker.smoothed, tracker.raw);
    // A re-entry snap doesn't register as a movement delta either.
    assert!(!tracker.is_idle(0.5));
}
