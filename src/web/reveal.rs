//! Scroll-triggered fade-in wiring.

use web_sys::{Document, Window};

use super::dom::{self, DomError};
use super::media::MediaPrefs;
use super::observer;
use crate::config::SiteConfig;
use crate::reveal::{REVEAL_SELECTOR, VISIBLE_CLASS, parse_delay_ms, transition_delay};

/// Wire scroll-triggered fade-ins. Returns how many elements were found.
///
/// # Errors
///
/// Returns [`DomError`] if the intersection observer cannot be created.
pub fn setup(
    window: &Window,
    document: &Document,
    prefs: &MediaPrefs,
    config: &SiteConfig,
) -> Result<usize, DomError> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    for el in &elements {
        let delay = parse_delay_ms(dom::data(el, "delay").as_deref());
        dom::set_style(el, "transition-delay", &transition_delay(delay));
    }

    if prefs.reduced_motion() || !observer::supported(window) {
        for el in &elements {
            dom::add_class(el, VISIBLE_CLASS);
        }
        return Ok(elements.len());
    }

    if !elements.is_empty() {
        observer::observe_once(&elements, config.reveal_threshold, |el| {
            dom::add_class(&el, VISIBLE_CLASS);
        })?;
    }
    Ok(elements.len())
}
