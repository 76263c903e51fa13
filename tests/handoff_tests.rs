// Host-side tests for the handoff flight and exactly-once signaling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/ease.rs"]
mod ease;
#[path = "../src/core/handoff.rs"]
mod handoff;

use handoff::*;

fn delta() -> FlightDelta {
    FlightDelta::between(
        &Rect::new(10.0, 20.0, 40.0, 80.0),
        &Rect::new(110.0, 220.0, 20.0, 40.0),
    )
}

#[test]
fn delta_is_computed_from_batched_rects() {
    let d = delta();
    assert_eq!(d.dx, 100.0);
    assert_eq!(d.dy, 200.0);
    assert_eq!(d.scale, 0.5);
}

#[test]
fn degenerate_source_height_defaults_to_unit_scale() {
    let d = FlightDelta::between(
        &Rect::new(0.0, 0.0, 0.0, 0.0),
        &Rect::new(10.0, 10.0, 20.0, 20.0),
    );
    assert_eq!(d.scale, 1.0);
}

#[test]
fn transform_interpolates_between_endpoints() {
    let mut flight = HandoffFlight::new(delta(), 1.0, 0.0);
    assert_eq!(flight.transform(), (0.0, 0.0, 1.0));
    flight.step(0.5);
    let (x, y, s) = flight.transform();
    assert!(x > 0.0 && x < 100.0);
    assert!(y > 0.0 && y < 200.0);
    assert!(s < 1.0 && s > 0.5);
    flight.step(1.0);
    assert_eq!(flight.transform(), (100.0, 200.0, 0.5));
}

#[test]
fn signal_fires_exactly_once_before_completion() {
    let mut flight = HandoffFlight::new(delta(), 1.0, 0.25);
    let mut signals = 0;
    let mut completions = 0;
    let mut signal_progress = None;
    for _ in 0..200 {
        let ev = flight.step(0.01);
        if ev.handoff {
            signals += 1;
            signal_progress = Some(flight.progress());
        }
        if ev.completed {
            completions += 1;
        }
    }
    assert_eq!(signals, 1);
    assert_eq!(completions, 1);
    // The signal leads completion by the dissolve window.
    let p = signal_progress.unwrap();
    assert!(p >= 0.74 && p <= 0.78, "signal at {p}");
}

#[test]
fn zero_duration_flight_still_signals_once() {
    let mut flight = HandoffFlight::new(delta(), 0.0, 0.0);
    let ev = flight.step(0.016);
    assert!(ev.handoff && ev.completed);
    let ev = flight.step(0.016);
    assert!(!ev.handoff && !ev.completed);
    assert!(flight.is_done());
}

#[test]
fn delta_is_not_recomputed_mid_flight() {
    let mut flight = HandoffFlight::new(delta(), 1.0, 0.2);
    let before = flight.delta();
    flight.step(0.5);
    assert_eq!(flight.delta(), before);
}

#[test]
fn cross_dissolve_overlaps_source_and_target() {
    let mut flight = HandoffFlight::new(delta(), 1.0, 0.3);
    assert_eq!(flight.source_opacity(), 1.0);
    assert_eq!(flight.target_opacity(), 0.0);
    flight.step(0.8);
    let source = flight.source_opacity();
    let target = flight.target_opacity();
    // Inside the window both instances are partially visible.
    assert!(source > 0.0 && source < 1.0);
    assert!(target > 0.0 && target < 1.0);
    flight.step(0.5);
    assert_eq!(flight.source_opacity(), 0.0);
    assert_eq!(flight.target_opacity(), 1.0);
}

#[test]
fn ledger_guards_reentrant_emission() {
    let mut ledger = SignalLedger::new();
    assert!(ledger.try_fire("intro-handoff"));
    assert!(!ledger.try_fire("intro-handoff"));
    assert!(ledger.has_fired("intro-handoff"));
    assert!(ledger.try_fire("menu-closed"));
}
