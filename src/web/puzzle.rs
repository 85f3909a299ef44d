//! Puzzle reveal wiring.
//!
//! Each `[data-puzzle]` element gets a slot tracking its [`PuzzlePhase`],
//! the preloaded image (when the source comes from `data-image`), and the
//! pending cleanup timeout. Dropping a slot's timeout cancels it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, Window};

use super::dom::{self, DomError};
use super::media::MediaPrefs;
use super::observer;
use crate::config::SiteConfig;
use crate::puzzle::{self as layout, GridAttrs, ImageGate, PuzzlePhase};

const PUZZLE_SELECTOR: &str = "[data-puzzle]";
const OVERLAY_CLASS: &str = "puzzle-overlay";

struct PuzzleSlot {
    element: HtmlElement,
    phase: Cell<PuzzlePhase>,
    loader: RefCell<Option<HtmlImageElement>>,
    cleanup: RefCell<Option<Timeout>>,
}

struct Puzzles {
    window: Window,
    document: Document,
    prefs: MediaPrefs,
    slots: Vec<Rc<PuzzleSlot>>,
}

fn image_source(el: &HtmlElement) -> Option<String> {
    let img_src = dom::query_one_in(el, "img").and_then(|img| img.get_attribute("src"));
    layout::resolve_image_source(dom::data(el, "image").as_deref(), img_src.as_deref())
}

/// Point `--puzzle-image` at the element's image and use it as the
/// background unless one is already set inline.
fn set_puzzle_image(el: &HtmlElement) {
    let Some(source) = image_source(el) else {
        return;
    };
    dom::set_style(el, "--puzzle-image", &layout::css_url(&source));
    if dom::inline_style(el, "background-image").is_empty() {
        dom::set_style(el, "background-image", "var(--puzzle-image)");
    }
}

fn grid_attrs(el: &HtmlElement) -> GridAttrs {
    GridAttrs {
        cols: dom::data(el, "cols"),
        rows: dom::data(el, "rows"),
        cols_mobile: dom::data(el, "colsMobile"),
        rows_mobile: dom::data(el, "rowsMobile"),
    }
}

fn remove_overlay(el: &HtmlElement) {
    for overlay in dom::query_all_in(el, &format!(":scope > .{OVERLAY_CLASS}")) {
        overlay.remove();
    }
}

impl Puzzles {
    fn slot_for(&self, el: &HtmlElement) -> Option<Rc<PuzzleSlot>> {
        self.slots.iter().find(|slot| &slot.element == el).cloned()
    }

    /// Called on first intersection.
    fn begin(self: &Rc<Self>, slot: &Rc<PuzzleSlot>) {
        if !slot.phase.get().accepts_reveal() {
            return;
        }
        if self.prefs.reduced_motion() {
            slot.phase.set(PuzzlePhase::Complete);
            return;
        }
        slot.phase.set(PuzzlePhase::Loading);
        let puzzles = Rc::clone(self);
        let for_ready = Rc::clone(slot);
        if let Err(err) = self.when_image_ready(slot, move |loaded| puzzles.image_settled(&for_ready, loaded)) {
            log::warn!("puzzle: image gate failed: {err}");
            slot.phase.set(PuzzlePhase::Failed);
        }
    }

    fn image_settled(self: &Rc<Self>, slot: &Rc<PuzzleSlot>, loaded: bool) {
        slot.loader.borrow_mut().take();
        if slot.phase.get() != PuzzlePhase::Loading {
            return;
        }
        if !loaded {
            log::warn!("puzzle: image failed to load, skipping animation");
            dom::add_class(&slot.element, "puzzle-failed");
            slot.phase.set(PuzzlePhase::Failed);
            return;
        }
        self.reveal(slot);
    }

    /// Call `on_done(loaded)` once the puzzle image has loaded or failed.
    fn when_image_ready<F>(&self, slot: &PuzzleSlot, on_done: F) -> Result<(), DomError>
    where
        F: FnOnce(bool) + 'static,
    {
        let child = dom::query_one_in(&slot.element, "img");
        let gate = ImageGate::select(dom::data(&slot.element, "image").as_deref(), child.is_some());
        let img = match (gate, child) {
            (ImageGate::Preload(source), _) => {
                let preload = HtmlImageElement::new()?;
                preload.set_src(&source);
                *slot.loader.borrow_mut() = Some(preload.clone());
                preload
            }
            (ImageGate::Child, Some(child)) => child.unchecked_into::<HtmlImageElement>(),
            (ImageGate::Child | ImageGate::Ready, _) => {
                on_done(true);
                return Ok(());
            }
        };

        if img.complete() {
            on_done(img.natural_width() > 0);
            return Ok(());
        }

        let pending = Rc::new(RefCell::new(Some(on_done)));
        for event in ["load", "error"] {
            let pending = Rc::clone(&pending);
            dom::listen(&img, event, move |ev: Event| {
                let done = pending.borrow_mut().take();
                if let Some(done) = done {
                    done(ev.type_() == "load");
                }
            })?;
        }
        Ok(())
    }

    /// Build the tile overlay. Returns the time until every tile has
    /// finished animating, or `None` if nothing was built.
    fn build(&self, el: &HtmlElement) -> Result<Option<f64>, DomError> {
        if dom::data(el, "puzzleBuilt").as_deref() == Some("true") || self.prefs.reduced_motion() {
            return Ok(None);
        }

        set_puzzle_image(el);
        dom::add_class(el, "puzzle-ready");

        let overlay = dom::create_div(&self.document, OVERLAY_CLASS)?;
        dom::set_attr(&overlay, "aria-hidden", "true");
        el.prepend_with_node_1(&overlay)?;

        let grid = grid_attrs(el).resolve(self.prefs.mobile());
        dom::set_style(el, "--puzzle-cols", &grid.cols.to_string());
        dom::set_style(el, "--puzzle-rows", &grid.rows.to_string());

        let mut rng = layout::seeded_rng(js_sys::Date::now(), js_sys::Math::random());
        let pieces = layout::layout_pieces(grid, &mut rng);
        for piece in &pieces {
            let tile = dom::create_div(&self.document, "puzzle-piece")?;
            for (property, value) in piece.style_entries() {
                dom::set_style(&tile, property, &value);
            }
            overlay.append_child(&tile)?;
        }

        dom::set_data(el, "puzzleBuilt", "true");
        log::debug!("puzzle: built {}x{} grid", grid.cols, grid.rows);
        Ok(Some(layout::settle_ms(&pieces)))
    }

    fn reveal(self: &Rc<Self>, slot: &Rc<PuzzleSlot>) {
        if self.prefs.reduced_motion() {
            slot.phase.set(PuzzlePhase::Complete);
            return;
        }
        let settle_ms = match self.build(&slot.element) {
            Ok(Some(ms)) => ms,
            Ok(None) => return,
            Err(err) => {
                log::warn!("puzzle: build failed: {err}");
                remove_overlay(&slot.element);
                slot.phase.set(PuzzlePhase::Failed);
                return;
            }
        };

        let revealed = slot.element.clone();
        dom::next_frame(&self.window, move || dom::add_class(&revealed, "puzzle-revealed"));
        slot.phase.set(PuzzlePhase::Revealing);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delay = settle_ms.ceil() as u32;
        let finished = Rc::downgrade(slot);
        let timeout = Timeout::new(delay, move || {
            if let Some(slot) = finished.upgrade() {
                complete(&slot);
            }
        });
        *slot.cleanup.borrow_mut() = Some(timeout);
    }

    /// Reduced motion switched on: cancel pending cleanups and drop overlays.
    fn settle_all(&self) {
        for slot in &self.slots {
            if slot.phase.get().needs_cleanup() {
                let pending = slot.cleanup.borrow_mut().take();
                drop(pending);
                complete(slot);
            }
        }
    }
}

fn complete(slot: &PuzzleSlot) {
    remove_overlay(&slot.element);
    dom::add_class(&slot.element, "puzzle-complete");
    slot.phase.set(PuzzlePhase::Complete);
}

/// Wire every puzzle element. Returns how many were found.
///
/// # Errors
///
/// Returns [`DomError`] if the intersection observer or the reduced-motion
/// listener cannot be set up.
pub fn setup(
    window: &Window,
    document: &Document,
    prefs: &MediaPrefs,
    config: &SiteConfig,
) -> Result<usize, DomError> {
    let elements = dom::query_all(document, PUZZLE_SELECTOR);
    if elements.is_empty() {
        return Ok(0);
    }
    for el in &elements {
        set_puzzle_image(el);
    }
    if prefs.reduced_motion() {
        return Ok(elements.len());
    }
    if !observer::supported(window) {
        log::debug!("puzzle: IntersectionObserver unavailable, leaving images static");
        return Ok(elements.len());
    }

    let puzzles = Rc::new(Puzzles {
        window: window.clone(),
        document: document.clone(),
        prefs: prefs.clone(),
        slots: elements
            .iter()
            .map(|el| {
                Rc::new(PuzzleSlot {
                    element: el.clone(),
                    phase: Cell::new(PuzzlePhase::Idle),
                    loader: RefCell::new(None),
                    cleanup: RefCell::new(None),
                })
            })
            .collect(),
    });

    let on_enter = Rc::clone(&puzzles);
    observer::observe_once(&elements, config.puzzle_threshold, move |el| {
        if let Some(slot) = on_enter.slot_for(&el) {
            on_enter.begin(&slot);
        }
    })?;

    let on_motion = Rc::clone(&puzzles);
    prefs.on_reduced_motion_change(move |reduced| {
        if reduced {
            on_motion.settle_all();
        }
    })?;

    log::debug!("puzzle: observing {} elements", elements.len());
    Ok(elements.len())
}
