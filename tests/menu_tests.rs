// Host-side tests for the overlay menu state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/menu.rs"]
mod menu;

use menu::*;

#[test]
fn full_cycle() {
    let mut state = MenuState::new();
    assert_eq!(state.phase(), MenuPhase::Closed);
    assert!(state.request_open());
    assert_eq!(state.phase(), MenuPhase::Opening);
    assert!(state.is_animating());
    assert_eq!(state.finish(), MenuPhase::Open);
    assert!(state.is_open());
    assert!(state.request_close());
    assert_eq!(state.phase(), MenuPhase::Closing);
    assert_eq!(state.finish(), MenuPhase::Closed);
    assert!(!state.is_open());
}

#[test]
fn requests_mid_transition_are_dropped() {
    let mut state = MenuState::new();
    assert!(state.request_open());
    // Re-entrant requests while opening: dropped, not queued.
    assert!(!state.request_open());
    assert!(!state.request_close());
    assert_eq!(state.phase(), MenuPhase::Opening);
    state.finish();

    assert!(state.request_close());
    assert!(!state.request_close());
    assert!(!state.request_open());
    assert_eq!(state.phase(), MenuPhase::Closing);
    // Terminal state matches a run without the duplicate requests.
    assert_eq!(state.finish(), MenuPhase::Closed);
}

#[test]
fn duplicate_open_does_not_change_terminal_state() {
    let mut clean = MenuState::new();
    clean.request_open();
    clean.finish();

    let mut noisy = MenuState::new();
    noisy.request_open();
    noisy.request_open();
    noisy.request_open();
    noisy.finish();

    assert_eq!(clean.phase(), noisy.phase());
}

#[test]
fn finish_is_a_noop_in_stable_states() {
    let mut state = MenuState::new();
    assert_eq!(state.finish(), MenuPhase::Closed);
    state.request_open();
    state.finish();
    assert_eq!(state.finish(), MenuPhase::Open);
}

#[test]
fn close_requires_fully_open() {
    let mut state = MenuState::new();
    assert!(!state.request_close());
    state.request_open();
    assert!(!state.request_close(), "closing from opening is rejected");
}
