//! Hero parallax wiring.

use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use super::dom::{self, DomError};
use super::frame::FrameLoop;
use super::media::MediaPrefs;
use crate::parallax::{HERO_SELECTOR, OFFSET_PROPERTY, offset_value, parallax_enabled, parallax_offset};

fn update(hero: &HtmlElement, prefs: &MediaPrefs) {
    let enabled = parallax_enabled(prefs.reduced_motion(), prefs.mobile());
    let top = if enabled { hero.get_bounding_client_rect().top() } else { 0.0 };
    dom::set_style(hero, OFFSET_PROPERTY, &offset_value(parallax_offset(top, enabled)));
}

/// Wire the hero parallax. Returns `false` when the page has no hero.
///
/// # Errors
///
/// Returns [`DomError`] if the scroll, resize or media listeners cannot be
/// attached.
pub fn setup(window: &Window, document: &Document, prefs: &MediaPrefs) -> Result<bool, DomError> {
    let Some(hero) = dom::query_one(document, HERO_SELECTOR) else {
        return Ok(false);
    };
    let refresh: Rc<dyn Fn()> = {
        let prefs = prefs.clone();
        Rc::new(move || update(&hero, &prefs))
    };

    let frame = {
        let refresh = Rc::clone(&refresh);
        FrameLoop::new(window.clone(), move || refresh())
    };
    dom::listen_passive(window, "scroll", move |_| frame.request())?;

    let on_resize = Rc::clone(&refresh);
    dom::listen(window, "resize", move |_| on_resize())?;
    let on_motion = Rc::clone(&refresh);
    prefs.on_reduced_motion_change(move |_| on_motion())?;
    let on_breakpoint = Rc::clone(&refresh);
    prefs.on_mobile_change(move |_| on_breakpoint())?;

    refresh();
    Ok(true)
}
