// Host-side tests for color parsing and interpolation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/color.rs"]
mod color;

use color::*;

#[test]
fn parses_with_and_without_hash() {
    assert_eq!(
        parse_hex("#62b6cb"),
        Some(Rgb {
            r: 0x62,
            g: 0xb6,
            b: 0xcb
        })
    );
    assert_eq!(parse_hex("62b6cb"), parse_hex("#62b6cb"));
    assert_eq!(parse_hex("  #1b2028  "), parse_hex("1b2028"));
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(parse_hex(""), None);
    assert_eq!(parse_hex("#fff"), None);
    assert_eq!(parse_hex("#zzzzzz"), None);
    assert_eq!(parse_hex("#62b6cb00"), None);
    // Multi-byte input must not panic on slicing.
    assert_eq!(parse_hex("#日本語色値"), None);
}

#[test]
fn css_strings() {
    let c = parse_hex("#ff990a").unwrap();
    assert_eq!(c.css(), "rgb(255, 153, 10)");
    assert_eq!(c.rgba(0.5), "rgba(255, 153, 10, 0.5)");
    // Alpha is clamped.
    assert_eq!(c.rgba(7.0), "rgba(255, 153, 10, 1)");
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = parse_hex("#000000").unwrap();
    let b = parse_hex("#ffffff").unwrap();
    assert_eq!(Rgb::lerp(a, b, 0.0), a);
    assert_eq!(Rgb::lerp(a, b, 1.0), b);
    let mid = Rgb::lerp(a, b, 0.5);
    assert_eq!(mid, Rgb { r: 128, g: 128, b: 128 });
    // Out-of-range t clamps.
    assert_eq!(Rgb::lerp(a, b, 2.0), b);
}
