//! Hero carousel wiring.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FocusEvent, HtmlElement, KeyboardEvent, Node};

use super::dom::{self, DomError};
use super::media::MediaPrefs;
use crate::carousel::{AutoplayHold, CarouselCommand, CarouselState, dot_label};
use crate::config::SiteConfig;

const SLIDE_SELECTOR: &str = ".hero-slide";
const DOT_SELECTOR: &str = ".hero-dot";
const PREV_SELECTOR: &str = ".hero-arrow-prev";
const NEXT_SELECTOR: &str = ".hero-arrow-next";
const CONTAINER_SELECTOR: &str = ".hero-carousel";

struct Carousel {
    slides: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    state: RefCell<CarouselState>,
    hold: Cell<AutoplayHold>,
    autoplay: RefCell<Option<Interval>>,
    interval_ms: u32,
}

impl Carousel {
    fn render(&self, index: usize) {
        let state = self.state.borrow();
        for (slide, view) in self.slides.iter().zip(state.slides()) {
            dom::set_style(slide, "display", view.display);
            dom::toggle_class(slide, "is-active", view.active);
            dom::set_attr(slide, "aria-hidden", view.aria_hidden);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            let active = i == index;
            dom::toggle_class(dot, "active", active);
            if active {
                dom::set_attr(dot, "aria-current", "true");
            } else {
                dom::remove_attr(dot, "aria-current");
            }
        }
    }

    fn navigate(self: &Rc<Self>, command: CarouselCommand) {
        let target = self.state.borrow_mut().apply(command);
        if let Some(index) = target {
            self.render(index);
        }
        if command.is_user_initiated() {
            self.restart_autoplay();
        }
    }

    /// Drop the running interval and start a fresh one unless autoplay is
    /// held.
    fn restart_autoplay(self: &Rc<Self>) {
        let previous = self.autoplay.borrow_mut().take();
        drop(previous);
        if self.hold.get().is_paused() || self.slides.len() < 2 {
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let interval = Interval::new(self.interval_ms, move || {
            if let Some(carousel) = weak.upgrade() {
                carousel.navigate(CarouselCommand::Tick);
            }
        });
        *self.autoplay.borrow_mut() = Some(interval);
    }

    fn update_hold(self: &Rc<Self>, change: impl FnOnce(&mut AutoplayHold)) {
        let before = self.hold.get();
        let mut after = before;
        change(&mut after);
        self.hold.set(after);
        if before.is_paused() != after.is_paused() {
            self.restart_autoplay();
        }
    }
}

fn on_click(el: &HtmlElement, carousel: &Rc<Carousel>, command: CarouselCommand) -> Result<(), DomError> {
    let carousel = Rc::clone(carousel);
    dom::listen(el, "click", move |_| carousel.navigate(command))
}

fn focus_left(container: &HtmlElement, event: &Event) -> bool {
    let next = event
        .dyn_ref::<FocusEvent>()
        .and_then(FocusEvent::related_target)
        .and_then(|target| target.dyn_ref::<Node>().cloned());
    !container.contains(next.as_ref())
}

fn wire_container(container: &HtmlElement, carousel: &Rc<Carousel>) -> Result<(), DomError> {
    let c = Rc::clone(carousel);
    dom::listen(container, "mouseenter", move |_| c.update_hold(|h| h.hovered = true))?;
    let c = Rc::clone(carousel);
    dom::listen(container, "mouseleave", move |_| c.update_hold(|h| h.hovered = false))?;
    let c = Rc::clone(carousel);
    dom::listen(container, "focusin", move |_| c.update_hold(|h| h.focused = true))?;
    let c = Rc::clone(carousel);
    let watched = container.clone();
    dom::listen(container, "focusout", move |event| {
        if focus_left(&watched, &event) {
            c.update_hold(|h| h.focused = false);
        }
    })?;
    let c = Rc::clone(carousel);
    dom::listen(container, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(command) = CarouselCommand::from_key(&key) {
            event.prevent_default();
            c.navigate(command);
        }
    })
}

/// Wire the hero carousel. Returns `false` when the page has no slides.
///
/// # Errors
///
/// Returns [`DomError`] if a click, hover, focus or key listener cannot be
/// attached.
pub fn setup(document: &Document, prefs: &MediaPrefs, config: &SiteConfig) -> Result<bool, DomError> {
    let slides = dom::query_all(document, SLIDE_SELECTOR);
    let Some(state) = CarouselState::new(slides.len()) else {
        return Ok(false);
    };
    let dots = dom::query_all(document, DOT_SELECTOR);
    for (i, dot) in dots.iter().enumerate() {
        if !dot.has_attribute("aria-label") {
            dom::set_attr(dot, "aria-label", &dot_label(i));
        }
    }

    let container = dom::query_one(document, CONTAINER_SELECTOR).or_else(|| {
        slides
            .first()
            .and_then(|slide| slide.parent_element())
            .and_then(|p| p.dyn_ref::<HtmlElement>().cloned())
    });

    let carousel = Rc::new(Carousel {
        slides,
        dots,
        state: RefCell::new(state),
        hold: Cell::new(AutoplayHold { reduced_motion: prefs.reduced_motion(), ..AutoplayHold::default() }),
        autoplay: RefCell::new(None),
        interval_ms: config.carousel_interval_ms,
    });

    for (i, dot) in carousel.dots.iter().enumerate() {
        on_click(dot, &carousel, CarouselCommand::GoTo(i))?;
    }
    if let Some(prev) = dom::query_one(document, PREV_SELECTOR) {
        on_click(&prev, &carousel, CarouselCommand::Prev)?;
    }
    if let Some(next) = dom::query_one(document, NEXT_SELECTOR) {
        on_click(&next, &carousel, CarouselCommand::Next)?;
    }
    if let Some(container) = container {
        wire_container(&container, &carousel)?;
    }

    let c = Rc::clone(&carousel);
    prefs.on_reduced_motion_change(move |reduced| c.update_hold(|h| h.reduced_motion = reduced))?;

    carousel.render(0);
    carousel.restart_autoplay();
    log::debug!("carousel: {} slides", carousel.slides.len());
    Ok(true)
}
