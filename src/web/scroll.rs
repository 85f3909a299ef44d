//! Smooth same-page anchor scrolling.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Event, FocusOptions, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{self, DomError, LogErr, describe};
use super::media::MediaPrefs;
use crate::scroll::{ANCHOR_SELECTOR, HEADER_SELECTOR, ScrollMode, fragment_target, scroll_destination};

struct AnchorScroll {
    window: Window,
    document: Document,
    prefs: MediaPrefs,
}

impl AnchorScroll {
    fn on_click(&self, link: &HtmlElement, event: &Event) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(selector) = fragment_target(&href) else {
            return;
        };
        // Unresolvable fragments fall through to the browser's own handling.
        let Some(target) = dom::query_one(&self.document, selector) else {
            return;
        };
        event.prevent_default();

        let header_height = dom::query_one(&self.document, HEADER_SELECTOR)
            .map_or(0.0, |header| f64::from(header.offset_height()));
        let scroll_y = match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("scrollY: {}", describe(&err));
                0.0
            }
        };
        let top = scroll_destination(target.get_bounding_client_rect().top(), scroll_y, header_height);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match ScrollMode::for_preference(self.prefs.reduced_motion()) {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Auto,
        });
        self.window.scroll_to_with_scroll_to_options(&options);

        match self.window.history() {
            Ok(history) => history
                .push_state_with_url(&JsValue::NULL, "", Some(selector))
                .log_err("history.pushState"),
            Err(err) => log::warn!("history: {}", describe(&err)),
        }

        if target.tab_index() < 0 {
            dom::set_attr(&target, "tabindex", "-1");
        }
        let focus = FocusOptions::new();
        focus.set_prevent_scroll(true);
        target.focus_with_options(&focus).log_err("focus anchor target");
    }
}

/// Wire same-page anchor links. Returns how many links were found.
///
/// # Errors
///
/// Returns [`DomError`] if a click listener cannot be attached.
pub fn setup(window: &Window, document: &Document, prefs: &MediaPrefs) -> Result<usize, DomError> {
    let links = dom::query_all(document, ANCHOR_SELECTOR);
    if links.is_empty() {
        return Ok(0);
    }
    let scroller = Rc::new(AnchorScroll {
        window: window.clone(),
        document: document.clone(),
        prefs: prefs.clone(),
    });
    for link in &links {
        let scroller = Rc::clone(&scroller);
        let clicked = link.clone();
        dom::listen(link, "click", move |event| scroller.on_click(&clicked, &event))?;
    }
    Ok(links.len())
}
