//! In-page anchor scrolling that clears the sticky header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts;

/// Links handled by smooth scrolling: same-page fragments other than `#`.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]:not([href=\"#\"])";

pub const HEADER_SELECTOR: &str = ".site-header";

/// The fragment selector of an in-page link, if the link is one we handle.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document scroll position that puts the target just below the header.
///
/// `target_top` is the target's viewport-relative top edge
/// (`getBoundingClientRect().top`).
#[must_use]
pub fn scroll_destination(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (target_top + scroll_y - header_height - consts::ANCHOR_GAP_PX).max(0.0)
}

/// Browser scroll behavior for the visitor's motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    #[must_use]
    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion { Self::Instant } else { Self::Smooth }
    }
}
