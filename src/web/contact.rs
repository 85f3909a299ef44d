//! Contact form wiring.
//!
//! Client-side only: validation and payload shaping come from
//! `crate::contact`; this module reads the inputs, posts the JSON with
//! `gloo-net`, and reflects progress in the form's status region.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use super::dom::{self, DomError, LogErr, describe};
use crate::config::SiteConfig;
use crate::contact::{
    ContactDraft, ContactError, ContactSubmission, FORM_SELECTOR, FieldError, FormStatus,
    HONEYPOT_FIELD, STATUS_CLASSES, STATUS_SELECTOR, check_status, resolve_endpoint,
};

const FIELDS: [&str; 5] = ["name", "email", "phone", "company", "message"];

/// POST the submission as JSON.
///
/// # Errors
///
/// Returns [`ContactError::Network`] if the request cannot be built or sent
/// and [`ContactError::Rejected`] for a non-2xx response.
pub async fn post(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    let response = Request::post(endpoint)
        .json(submission)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    check_status(response.status())
}

struct ContactForm {
    window: Window,
    form: HtmlFormElement,
    status: HtmlElement,
    endpoint: Option<String>,
    busy: Cell<bool>,
}

fn field(form: &Element, name: &str) -> Option<Element> {
    match form.query_selector(&format!("[name=\"{name}\"]")) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("contact: field {name}: {}", describe(&err));
            None
        }
    }
}

fn field_value(form: &Element, name: &str) -> String {
    let Some(el) = field(form, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn status_region(document: &Document, form: &HtmlFormElement) -> Result<HtmlElement, DomError> {
    if let Some(existing) = dom::query_one_in(form, STATUS_SELECTOR) {
        return Ok(existing);
    }
    let status = dom::create_div(document, "form-status")?;
    dom::set_attr(&status, "data-form-status", "");
    dom::set_attr(&status, "role", "status");
    dom::set_attr(&status, "aria-live", "polite");
    form.append_child(&status)?;
    Ok(status)
}

impl ContactForm {
    fn draft(&self) -> ContactDraft {
        let [name, email, phone, company, message] = FIELDS.map(|f| field_value(&self.form, f));
        ContactDraft { name, email, phone, company, message, honeypot: field_value(&self.form, HONEYPOT_FIELD) }
    }

    fn render(&self, status: &FormStatus) {
        for class in STATUS_CLASSES {
            dom::remove_class(&self.status, class);
        }
        if let Some(class) = status.class() {
            dom::add_class(&self.status, class);
        }
        self.status.set_text_content(Some(status.message()));

        let busy = status.is_busy();
        for button in dom::query_all_in(&self.form, "button[type=\"submit\"], button:not([type])") {
            if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(busy);
            }
        }
        if busy {
            dom::set_attr(&self.form, "aria-busy", "true");
        } else {
            dom::remove_attr(&self.form, "aria-busy");
        }
    }

    /// Flag invalid inputs and focus the first one.
    fn mark_fields(&self, errors: &[FieldError]) {
        for name in FIELDS {
            let Some(el) = field(&self.form, name) else {
                continue;
            };
            if errors.iter().any(|e| e.field() == name) {
                dom::set_attr(&el, "aria-invalid", "true");
            } else {
                dom::remove_attr(&el, "aria-invalid");
            }
        }
        let first = errors.first().and_then(|e| field(&self.form, e.field()));
        if let Some(el) = first.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            el.focus().log_err("contact: focus invalid field");
        }
    }

    fn finish(&self, result: Result<(), ContactError>) {
        if let Err(err) = &result {
            log::warn!("contact: submission failed: {err:?}");
        } else {
            self.form.reset();
        }
        self.busy.set(false);
        self.render(&FormStatus::from_result(&result));
    }

    fn on_submit(self: &Rc<Self>, event: &Event) {
        event.prevent_default();
        if self.busy.get() {
            return;
        }

        let draft = self.draft();
        if draft.is_spam() {
            log::debug!("contact: honeypot filled, dropping submission");
            self.finish(Ok(()));
            return;
        }

        let page = match self.window.location().href() {
            Ok(href) => href,
            Err(err) => {
                log::warn!("contact: location: {}", describe(&err));
                String::new()
            }
        };
        let submitted_at = String::from(js_sys::Date::new_0().to_iso_string());
        let submission = match draft.into_submission(&page, &submitted_at) {
            Ok(submission) => submission,
            Err(ContactError::Invalid(errors)) => {
                self.mark_fields(&errors);
                self.render(&FormStatus::Failed(ContactError::Invalid(errors).to_string()));
                return;
            }
            Err(err) => {
                self.finish(Err(err));
                return;
            }
        };
        self.mark_fields(&[]);

        let Some(endpoint) = self.endpoint.clone() else {
            self.finish(Err(ContactError::NotConfigured));
            return;
        };

        self.busy.set(true);
        self.render(&FormStatus::Sending);
        let form = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let result = post(&endpoint, &submission).await;
            form.finish(result);
        });
    }
}

/// Wire every contact form. Returns how many were found.
///
/// # Errors
///
/// Returns [`DomError`] if a status region cannot be inserted or the submit
/// listener cannot be attached.
pub fn setup(window: &Window, document: &Document, config: &SiteConfig) -> Result<usize, DomError> {
    let forms = dom::query_all(document, FORM_SELECTOR);
    for el in &forms {
        let Some(form) = el.dyn_ref::<HtmlFormElement>().cloned() else {
            continue;
        };
        let endpoint = resolve_endpoint(dom::data(el, "webhook").as_deref(), config.contact_webhook.as_deref());
        if endpoint.is_none() {
            log::warn!("contact: form has no webhook configured");
        }
        let contact = Rc::new(ContactForm {
            window: window.clone(),
            status: status_region(document, &form)?,
            form,
            endpoint,
            busy: Cell::new(false),
        });
        let on_submit = Rc::clone(&contact);
        dom::listen(el, "submit", move |event| on_submit.on_submit(&event))?;
    }
    Ok(forms.len())
}
