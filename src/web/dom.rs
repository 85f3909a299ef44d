//! Thin helpers over `web-sys` DOM calls.
//!
//! ERROR HANDLING
//! ==============
//! Styling and attribute writes are best-effort: a failure is logged with
//! its context and the behavior carries on. Lookups that a behavior cannot
//! work without return [`DomError`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window,
};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("no {0} available")]
    Missing(&'static str),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

/// Human-readable text for a thrown JS value.
#[must_use]
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Log a failed best-effort browser call.
pub trait LogErr {
    fn log_err(self, context: &str);
}

impl<T> LogErr for Result<T, JsValue> {
    fn log_err(self, context: &str) {
        if let Err(err) = self {
            log::warn!("{context}: {}", describe(&err));
        }
    }
}

/// The global window.
///
/// # Errors
///
/// Returns [`DomError::Missing`] outside a browser window context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::Missing("window"))
}

/// The window's document.
///
/// # Errors
///
/// Returns [`DomError::Missing`] when the window has no document.
pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::Missing("document"))
}

// ── Queries ─────────────────────────────────────────────────────

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// All HTML elements in the document matching `selector`.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(err) => {
            log::warn!("query {selector}: {}", describe(&err));
            Vec::new()
        }
    }
}

/// All HTML descendants of `root` matching `selector`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => html_elements(&list),
        Err(err) => {
            log::warn!("query {selector}: {}", describe(&err));
            Vec::new()
        }
    }
}

/// First HTML element in the document matching `selector`.
#[must_use]
pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(err) => {
            log::warn!("query {selector}: {}", describe(&err));
            None
        }
    }
}

/// First HTML descendant of `root` matching `selector`.
#[must_use]
pub fn query_one_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(err) => {
            log::warn!("query {selector}: {}", describe(&err));
            None
        }
    }
}

// ── Element state ───────────────────────────────────────────────

/// Read a `data-*` attribute by its camelCase dataset key.
#[must_use]
pub fn data(el: &HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

pub fn set_data(el: &HtmlElement, key: &str, value: &str) {
    el.dataset().set(key, value).log_err("set dataset");
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).log_err(property);
}

#[must_use]
pub fn inline_style(el: &HtmlElement, property: &str) -> String {
    match el.style().get_property_value(property) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("read {property}: {}", describe(&err));
            String::new()
        }
    }
}

pub fn add_class(el: &Element, class: &str) {
    el.class_list().add_1(class).log_err(class);
}

pub fn remove_class(el: &Element, class: &str) {
    el.class_list().remove_1(class).log_err(class);
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    el.class_list().toggle_with_force(class, on).log_err(class);
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    el.set_attribute(name, value).log_err(name);
}

pub fn remove_attr(el: &Element, name: &str) {
    el.remove_attribute(name).log_err(name);
}

/// Create a `<div>` with the given class.
///
/// # Errors
///
/// Returns [`DomError`] if the element cannot be created.
pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, DomError> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    Ok(el.unchecked_into::<HtmlElement>())
}

/// Create a `<span>` with the given class.
///
/// # Errors
///
/// Returns [`DomError`] if the element cannot be created.
pub fn create_span(document: &Document, class: &str) -> Result<HtmlElement, DomError> {
    let el = document.create_element("span")?;
    el.set_class_name(class);
    Ok(el.unchecked_into::<HtmlElement>())
}

// ── Events ──────────────────────────────────────────────────────

/// Attach a listener for the lifetime of the page.
///
/// # Errors
///
/// Returns [`DomError`] if the target rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a passive listener (scroll/touch) for the lifetime of the page.
///
/// # Errors
///
/// Returns [`DomError`] if the target rejects the listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `f` on the next animation frame.
pub fn next_frame<F>(window: &Window, f: F)
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move |_ts: f64| f());
    window
        .request_animation_frame(callback.unchecked_ref())
        .log_err("request animation frame");
}
