#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn offset_scales_against_scroll_direction() {
    assert!((parallax_offset(100.0, true) - -8.0).abs() < 1e-9);
    assert!((parallax_offset(-250.0, true) - 20.0).abs() < 1e-9);
}

#[test]
fn offset_is_clamped() {
    assert_eq!(parallax_offset(-10_000.0, true), 60.0);
    assert_eq!(parallax_offset(10_000.0, true), -60.0);
}

#[test]
fn disabled_offset_is_zero() {
    assert_eq!(parallax_offset(400.0, false), 0.0);
}

#[test]
fn zero_top_is_positive_zero() {
    let offset = parallax_offset(0.0, true);
    assert_eq!(offset_value(offset), "0px");
}

#[test]
fn non_finite_top_is_zero() {
    assert_eq!(parallax_offset(f64::NAN, true), 0.0);
}

#[test]
fn reduced_motion_or_mobile_disables() {
    assert!(parallax_enabled(false, false));
    assert!(!parallax_enabled(true, false));
    assert!(!parallax_enabled(false, true));
}

#[test]
fn offset_value_has_px_suffix() {
    assert_eq!(offset_value(-12.5), "-12.5px");
    assert_eq!(offset_value(60.0), "60px");
}
