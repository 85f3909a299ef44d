//! One-shot viewport intersection.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::dom::{DomError, describe};

/// Whether the browser exposes `IntersectionObserver`.
#[must_use]
pub fn supported(window: &Window) -> bool {
    match Reflect::has(window, &JsValue::from_str("IntersectionObserver")) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("IntersectionObserver probe: {}", describe(&err));
            false
        }
    }
}

/// Observe `targets` and call `on_enter` the first time each one becomes
/// visible at `threshold`. Each target is unobserved after it fires.
///
/// # Errors
///
/// Returns [`DomError`] if the browser rejects the observer options.
pub fn observe_once<F>(
    targets: &[HtmlElement],
    threshold: f64,
    mut on_enter: F,
) -> Result<IntersectionObserver, DomError>
where
    F: FnMut(HtmlElement) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    on_enter(el.clone());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
