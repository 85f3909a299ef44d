#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_links_are_accepted() {
    assert_eq!(fragment_target("#contact"), Some("#contact"));
    assert_eq!(fragment_target(" #pricing "), Some("#pricing"));
}

#[test]
fn bare_hash_and_other_links_are_rejected() {
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/about#team"), None);
    assert_eq!(fragment_target(""), None);
}

#[test]
fn destination_subtracts_header_and_gap() {
    assert_eq!(scroll_destination(500.0, 1000.0, 80.0), 1408.0);
}

#[test]
fn destination_without_header_keeps_gap() {
    assert_eq!(scroll_destination(200.0, 0.0, 0.0), 188.0);
}

#[test]
fn destination_never_negative() {
    assert_eq!(scroll_destination(-50.0, 20.0, 80.0), 0.0);
}

#[test]
fn reduced_motion_scrolls_instantly() {
    assert_eq!(ScrollMode::for_preference(true), ScrollMode::Instant);
    assert_eq!(ScrollMode::for_preference(false), ScrollMode::Smooth);
}
