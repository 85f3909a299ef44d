//! Contact form submission.
//!
//! The form posts a JSON [`ContactSubmission`] to a third-party webhook.
//! Validation, payload shaping, and status messaging live here; the browser
//! shell (`web::contact`) reads fields, sends the request with `gloo-net`,
//! and renders [`FormStatus`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced as a [`ContactError`] whose `Display` text is
//! safe to show to the visitor. Nothing is retried automatically.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::consts;

pub const FORM_SELECTOR: &str = "form[data-contact-form]";
pub const STATUS_SELECTOR: &str = "[data-form-status]";

/// Hidden field real visitors leave empty.
pub const HONEYPOT_FIELD: &str = "website";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Please check the highlighted fields.")]
    Invalid(Vec<FieldError>),
    #[error("The contact form is not configured.")]
    NotConfigured,
    #[error("Your message could not be sent. Please try again later.")]
    Network(String),
    #[error("Your message was rejected (status {status}).")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameMissing,
    EmailMissing,
    EmailInvalid,
    MessageMissing,
    MessageTooLong,
}

impl FieldError {
    /// The `name` attribute of the offending input.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::NameMissing => "name",
            Self::EmailMissing | Self::EmailInvalid => "email",
            Self::MessageMissing | Self::MessageTooLong => "message",
        }
    }
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub honeypot: String,
}

/// Webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub page: String,
    pub submitted_at: String,
}

impl ContactDraft {
    /// Check required fields. Errors are listed in form order.
    ///
    /// # Errors
    ///
    /// Returns every field error found.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameMissing);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailMissing);
        } else if !looks_like_email(email) {
            errors.push(FieldError::EmailInvalid);
        }
        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::MessageMissing);
        } else if message.chars().count() > consts::CONTACT_MESSAGE_MAX_CHARS {
            errors.push(FieldError::MessageTooLong);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Bots fill every input, including the hidden honeypot.
    #[must_use]
    pub fn is_spam(&self) -> bool {
        !self.honeypot.trim().is_empty()
    }

    /// Validate and build the webhook payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Invalid`] if any field fails validation.
    pub fn into_submission(
        self,
        page: &str,
        submitted_at: &str,
    ) -> Result<ContactSubmission, ContactError> {
        self.validate().map_err(ContactError::Invalid)?;
        Ok(ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: non_empty(&self.phone),
            company: non_empty(&self.company),
            message: self.message.trim().to_owned(),
            page: page.to_owned(),
            submitted_at: submitted_at.to_owned(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Loose `local@domain.tld` shape check. The webhook owner does real
/// verification.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

/// Pick the endpoint: the form's `data-webhook` wins over site config.
#[must_use]
pub fn resolve_endpoint(form_attr: Option<&str>, configured: Option<&str>) -> Option<String> {
    [form_attr, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Map an HTTP status to the submission outcome.
///
/// # Errors
///
/// Returns [`ContactError::Rejected`] for any non-2xx status.
pub fn check_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Rejected { status })
    }
}

/// What the status region shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    #[must_use]
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Sending => "Sending…",
            Self::Sent => "Thanks! We'll be in touch soon.",
            Self::Failed(msg) => msg,
        }
    }

    /// Class set on the status element; `None` clears all status classes.
    #[must_use]
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("is-sending"),
            Self::Sent => Some("is-success"),
            Self::Failed(_) => Some("is-error"),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Every class [`FormStatus::class`] can produce.
pub const STATUS_CLASSES: [&str; 3] = ["is-sending", "is-success", "is-error"];
