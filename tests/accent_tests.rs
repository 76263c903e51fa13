// Host-side tests for the accent color cycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/accent.rs"]
mod accent;

use accent::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const PALETTE: [&str; 4] = ["#62b6cb", "#da3036", "#ff990a", "#93b99e"];

#[test]
fn fresh_session_uses_the_default_index() {
    let cycle = AccentCycle::first_load(&PALETTE);
    assert_eq!(cycle.index(), 0);
    assert_eq!(cycle.color(), "#62b6cb");
}

#[test]
fn each_open_advances_by_one_and_wraps() {
    // Palette [C0..C3], fresh session: three opens walk 1, 2, 3 and a
    // fourth wraps back to 0.
    let mut cycle = AccentCycle::first_load(&PALETTE);
    assert_eq!(cycle.advance(), 1);
    assert_eq!(cycle.color(), "#da3036");
    assert_eq!(cycle.advance(), 2);
    assert_eq!(cycle.advance(), 3);
    assert_eq!(cycle.advance(), 0);
    assert_eq!(cycle.color(), "#62b6cb");
}

#[test]
fn reload_samples_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let cycle = AccentCycle::reload(&PALETTE, &mut rng);
        assert!(cycle.index() < PALETTE.len());
    }
}

#[test]
fn reload_covers_the_full_palette() {
    // Uniform sampling: every index shows up over enough reloads.
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[AccentCycle::reload(&PALETTE, &mut rng).index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn advance_after_reload_still_wraps() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut cycle = AccentCycle::reload(&PALETTE, &mut rng);
    let start = cycle.index();
    for i in 1..=PALETTE.len() {
        let expected = (start + i) % PALETTE.len();
        assert_eq!(cycle.advance(), expected);
    }
}
