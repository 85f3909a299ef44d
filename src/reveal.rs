//! Scroll-triggered fade-ins.
//!
//! Add `class="reveal"` to any element and an optional `data-delay="150"`
//! (milliseconds) for staggered reveals. The element gains `is-visible` the
//! first time it scrolls into view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Parse `data-delay` into whole milliseconds. Missing, negative, and
/// non-numeric values mean no delay.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_delay_ms(raw: Option<&str>) -> u32 {
    match raw.map(|s| s.trim().parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() && v > 0.0 => v.round().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// `transition-delay` value for a parsed delay.
#[must_use]
pub fn transition_delay(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}
