//! Startup: configuration, logging, and wiring every behavior.

use std::fmt::Display;

use web_sys::{Document, Window};

use super::dom::{self, DomError};
use super::media::MediaPrefs;
use super::{carousel, contact, parallax, puzzle, reveal, scroll, typing};
use crate::config::{CONFIG_ELEMENT_ID, ConfigError, SiteConfig};

/// Read the embedded configuration block, if any.
fn load_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(text) => SiteConfig::from_json(&text),
        None => Ok(SiteConfig::default()),
    }
}

fn init_logging(config: &SiteConfig) {
    let level = config.log_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Log the outcome of one behavior's setup. A failure never stops the rest.
fn report<T: Display>(name: &str, result: Result<T, DomError>) {
    match result {
        Ok(found) => log::debug!("{name}: wired ({found})"),
        Err(err) => log::error!("{name}: setup failed: {err}"),
    }
}

fn wire(window: &Window, document: &Document) {
    let (config, config_error) = match load_config(document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("{err}; using defaults");
    }
    if let Err(err) = config.log_level() {
        log::warn!("{err}; logging at info");
    }

    let prefs = MediaPrefs::new(window, &config);
    report("puzzle", puzzle::setup(window, document, &prefs, &config));
    report("carousel", carousel::setup(document, &prefs, &config));
    report("reveal", reveal::setup(window, document, &prefs, &config));
    report("anchors", scroll::setup(window, document, &prefs));
    report("parallax", parallax::setup(window, document, &prefs));
    report("typing", typing::setup(document, &prefs));
    report("contact", contact::setup(window, document, &config));
}

/// Wire all behaviors now, or once the DOM has finished parsing.
///
/// # Errors
///
/// Returns [`DomError`] when there is no window/document or the
/// `DOMContentLoaded` listener cannot be attached.
pub fn boot() -> Result<(), DomError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        wire(&window, &document);
        return Ok(());
    }
    let mut pending = Some((window, document.clone()));
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            wire(&window, &document);
        }
    })
}
