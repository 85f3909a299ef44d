//! Reduced-motion and breakpoint media queries.
//!
//! A missing `matchMedia` (or a query the browser rejects) reads as "does
//! not match", which keeps every effect in its default state.

use web_sys::{MediaQueryList, Window};

use super::dom::{self, DomError, describe};
use crate::config::SiteConfig;

#[derive(Clone)]
pub struct MediaPrefs {
    reduced_motion: Option<MediaQueryList>,
    mobile: Option<MediaQueryList>,
}

fn media_query(window: &Window, query: &str) -> Option<MediaQueryList> {
    match window.match_media(query) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("matchMedia {query}: {}", describe(&err));
            None
        }
    }
}

fn on_change<F>(list: Option<&MediaQueryList>, mut handler: F) -> Result<(), DomError>
where
    F: FnMut(bool) + 'static,
{
    let Some(list) = list else {
        return Ok(());
    };
    let watched = list.clone();
    dom::listen(list, "change", move |_| handler(watched.matches()))
}

impl MediaPrefs {
    #[must_use]
    pub fn new(window: &Window, config: &SiteConfig) -> Self {
        Self {
            reduced_motion: media_query(window, &config.reduced_motion_query),
            mobile: media_query(window, &config.mobile_query),
        }
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.as_ref().is_some_and(MediaQueryList::matches)
    }

    #[must_use]
    pub fn mobile(&self) -> bool {
        self.mobile.as_ref().is_some_and(MediaQueryList::matches)
    }

    /// Call `handler` with the new value whenever the reduced-motion
    /// preference changes.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the `change` listener cannot be attached.
    pub fn on_reduced_motion_change<F>(&self, handler: F) -> Result<(), DomError>
    where
        F: FnMut(bool) + 'static,
    {
        on_change(self.reduced_motion.as_ref(), handler)
    }

    /// Call `handler` with the new value whenever the breakpoint flips.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the `change` listener cannot be attached.
    pub fn on_mobile_change<F>(&self, handler: F) -> Result<(), DomError>
    where
        F: FnMut(bool) + 'static,
    {
        on_change(self.mobile.as_ref(), handler)
    }
}
