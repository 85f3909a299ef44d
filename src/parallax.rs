//! Hero parallax offset.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts;

pub const HERO_SELECTOR: &str = ".hero";
pub const OFFSET_PROPERTY: &str = "--parallax-offset";

/// Parallax offset in pixels for a hero whose top edge sits at `hero_top`
/// (viewport-relative). Disabled parallax always yields zero.
#[must_use]
pub fn parallax_offset(hero_top: f64, enabled: bool) -> f64 {
    if !enabled || !hero_top.is_finite() {
        return 0.0;
    }
    let offset = (hero_top * consts::PARALLAX_FACTOR)
        .clamp(-consts::PARALLAX_LIMIT_PX, consts::PARALLAX_LIMIT_PX);
    // Avoid writing "-0px".
    if offset == 0.0 { 0.0 } else { offset }
}

/// Whether the effect should run for the current media state.
#[must_use]
pub fn parallax_enabled(reduced_motion: bool, mobile: bool) -> bool {
    !reduced_motion && !mobile
}

/// CSS value for [`OFFSET_PROPERTY`].
#[must_use]
pub fn offset_value(offset: f64) -> String {
    format!("{offset}px")
}
