//! Coalesced `requestAnimationFrame` work.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::dom::{LogErr, describe};

/// Runs a piece of work at most once per animation frame. Requesting again
/// before the frame fires cancels the pending frame and schedules a new one.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl FrameLoop {
    #[must_use]
    pub fn new<F>(window: Window, mut work: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let pending_for_cb = Rc::clone(&pending);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            pending_for_cb.set(None);
            work();
        });
        Self { window, pending, callback }
    }

    pub fn request(&self) {
        if let Some(id) = self.pending.take() {
            self.window.cancel_animation_frame(id).log_err("cancel animation frame");
        }
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::warn!("request animation frame: {}", describe(&err)),
        }
    }
}
