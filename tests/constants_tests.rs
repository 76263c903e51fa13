// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/ease.rs"]
mod ease;

use constants::*;
use ease::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Field physics: friction below 1 is what stops oscillation.
    assert!(FIELD_FRICTION > 0.0 && FIELD_FRICTION < 1.0);
    assert!(FIELD_RETURN_STRENGTH > 0.0);
    assert!(FIELD_REPULSION_RADIUS > 0.0);
    assert!(FIELD_MAX_VELOCITY > 0.0);
    assert!(FIELD_SETTLE_EPS > 0.0);
    assert!(FIELD_BASE_OPACITY >= 0.0 && FIELD_BASE_OPACITY <= 1.0);
    assert!(FIELD_BASE_OPACITY + FIELD_GLOW_OPACITY_SPAN <= 1.0);

    // Quiet windows and time constants are positive.
    assert!(POINTER_QUIET_SEC > 0.0);
    assert!(TRAIL_QUIET_SEC > 0.0);
    assert!(FIELD_IDLE_SEC > 0.0);
    assert!(TRAIL_TWEEN_TAU > 0.0);
    assert!(MAX_FRAME_DT > 0.0);

    // The dissolve window fits inside the flight.
    assert!(INTRO_DISSOLVE_SEC < INTRO_FLIGHT_SEC);

    // Lerp factors are valid per-frame fractions.
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    for f in TRAIL_LERPS {
        assert!(f > 0.0 && f < 1.0);
    }
}

#[test]
fn trail_factors_strictly_decrease_along_the_chain() {
    // The chain invariant: each marker lags the one ahead of it.
    assert!(TRAIL_LERPS.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(TRAIL_LERPS.len(), TRAIL_SIZES_PX.len());
}

#[test]
fn eases_hit_their_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::QuartInOut,
        Ease::ExpoOut,
        Ease::BackOut,
        Ease::ElasticOut,
    ] {
        assert!((ease.apply(0.0) - 0.0).abs() < 1e-4, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-4, "{ease:?} at 1");
        // Inputs outside [0, 1] clamp to the endpoints.
        assert_eq!(ease.apply(-1.0), ease.apply(0.0));
        assert_eq!(ease.apply(2.0), ease.apply(1.0));
    }
}

#[test]
fn out_eases_lead_and_in_eases_trail() {
    assert!(quad_out(0.3) > 0.3);
    assert!(cubic_out(0.3) > 0.3);
    assert!(expo_out(0.3) > 0.3);
    assert!(quad_in(0.3) < 0.3);
    assert!(cubic_in(0.3) < 0.3);
}

#[test]
fn overshoot_eases_overshoot() {
    let mut back_peak = 0.0f32;
    let mut elastic_peak = 0.0f32;
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        back_peak = back_peak.max(back_out(t));
        elastic_peak = elastic_peak.max(elastic_out(t));
    }
    assert!(back_peak > 1.0);
    assert!(elastic_peak > 1.0);
}
