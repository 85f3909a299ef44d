//! Typing banner wiring.
//!
//! Each banner chains one-shot timeouts; the pending one is kept so that a
//! switch to reduced motion can cancel it by dropping it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::dom::{self, DomError};
use super::media::MediaPrefs;
use crate::typing::{TypingState, TypingTimings, parse_loop, parse_phrases};

const BANNER_SELECTOR: &str = "[data-typing]";
const TEXT_CLASS: &str = "typing-text";
const CARET_CLASS: &str = "typing-caret";

struct Banner {
    text: HtmlElement,
    state: RefCell<TypingState>,
    pending: RefCell<Option<Timeout>>,
}

impl Banner {
    fn schedule(self: &Rc<Self>, delay_ms: u32) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(banner) = weak.upgrade() {
                banner.tick();
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    fn tick(self: &Rc<Self>) {
        let frame = self.state.borrow_mut().step();
        self.text.set_text_content(Some(&frame.text));
        if let Some(delay) = frame.next_delay_ms {
            self.schedule(delay);
        }
    }

    fn start(self: &Rc<Self>) {
        self.state.borrow_mut().reset();
        self.text.set_text_content(Some(""));
        self.tick();
    }

    fn show_static(&self) {
        let pending = self.pending.borrow_mut().take();
        drop(pending);
        let text = self.state.borrow().static_text();
        self.text.set_text_content(Some(&text));
    }
}

/// The child that receives the animated text, created when missing.
fn text_target(document: &Document, banner: &HtmlElement) -> Result<HtmlElement, DomError> {
    if let Some(existing) = dom::query_one_in(banner, &format!(".{TEXT_CLASS}")) {
        return Ok(existing);
    }
    let text = dom::create_span(document, TEXT_CLASS)?;
    banner.set_text_content(None);
    banner.append_child(&text)?;
    Ok(text)
}

fn ensure_caret(document: &Document, banner: &HtmlElement) -> Result<(), DomError> {
    if dom::query_one_in(banner, &format!(".{CARET_CLASS}")).is_some() {
        return Ok(());
    }
    let caret = dom::create_span(document, CARET_CLASS)?;
    dom::set_attr(&caret, "aria-hidden", "true");
    banner.append_child(&caret)?;
    Ok(())
}

fn wire(document: &Document, prefs: &MediaPrefs, el: &HtmlElement) -> Result<bool, DomError> {
    let phrases = parse_phrases(&dom::data(el, "typingPhrases").unwrap_or_default());
    let looping = parse_loop(dom::data(el, "typingLoop").as_deref());
    let Some(state) = TypingState::new(&phrases, TypingTimings::default(), looping) else {
        log::debug!("typing: banner without phrases skipped");
        return Ok(false);
    };

    let text = text_target(document, el)?;
    ensure_caret(document, el)?;
    dom::set_attr(el, "aria-label", &state.aria_label());
    dom::set_attr(&text, "aria-hidden", "true");

    let banner = Rc::new(Banner { text, state: RefCell::new(state), pending: RefCell::new(None) });

    if prefs.reduced_motion() {
        banner.show_static();
    } else {
        banner.start();
    }

    let on_motion = Rc::clone(&banner);
    prefs.on_reduced_motion_change(move |reduced| {
        if reduced {
            on_motion.show_static();
        } else {
            on_motion.start();
        }
    })?;
    Ok(true)
}

/// Wire every typing banner. Returns how many were started.
///
/// # Errors
///
/// Returns [`DomError`] if the text or caret spans cannot be inserted or the
/// reduced-motion listener cannot be attached.
pub fn setup(document: &Document, prefs: &MediaPrefs) -> Result<usize, DomError> {
    let mut wired = 0;
    for el in dom::query_all(document, BANNER_SELECTOR) {
        if wire(document, prefs, &el)? {
            wired += 1;
        }
    }
    Ok(wired)
}
