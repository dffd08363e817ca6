//! Contact form fields, validation, and the single status-message slot.
//!
//! Validation is local and synchronous. A status message carries a
//! generation number; the deferred auto-hide after a successful submission
//! only clears the message it was scheduled for.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

/// How long the success message stays visible.
pub const STATUS_HIDE_DELAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "Спасибо! Ваше сообщение было отправлено. Мы ответим вам в течение 48 часов.";

/// Selectable values of the "category" field as `(code, label)`.
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("memory", "Поделиться воспоминанием"),
    ("document", "Передать документы или фото"),
    ("correction", "Сообщить о неточности"),
    ("other", "Другое"),
];

// Shape check only: something@something.something without whitespace.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `email` looks like `local@domain.tld`. Not RFC 5322 validation.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Reasons a submission is rejected before it leaves the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Пожалуйста, заполните все поля и согласитесь с обработкой данных")]
    MissingFields,
    #[error("Пожалуйста, введите корректный email")]
    InvalidEmail,
}

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub consent: bool,
}

/// Validated form payload handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    /// ISO-8601 time the form was submitted.
    pub timestamp: String,
}

impl ContactFields {
    /// Check required fields, then the email shape.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] if any text field is empty or consent
    /// is not given; [`ContactError::InvalidEmail`] if the email fails the
    /// shape check.
    pub fn validate(&self, timestamp: &str) -> Result<ContactSubmission, ContactError> {
        let missing = [&self.name, &self.email, &self.category, &self.message]
            .iter()
            .any(|v| v.is_empty());
        if missing || !self.consent {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            category: self.category.clone(),
            message: self.message.clone(),
            timestamp: timestamp.to_owned(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub generation: u64,
}

/// Contact form controller state provided to components through context.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub fields: ContactFields,
    pub status: Option<StatusMessage>,
    generation: u64,
}

impl ContactState {
    /// Replace whatever message is showing. Returns the new message's generation.
    pub fn show_status(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.status = Some(StatusMessage { kind, text: text.into(), generation: self.generation });
        self.generation
    }

    /// Hide the message if it is still the one from `generation`.
    pub fn hide_status(&mut self, generation: u64) -> bool {
        if self.status.as_ref().is_some_and(|s| s.generation == generation) {
            self.status = None;
            return true;
        }
        false
    }

    /// Validate the current fields. On rejection the error message is shown
    /// and the fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`ContactError`] that was displayed.
    pub fn submit(&mut self, timestamp: &str) -> Result<ContactSubmission, ContactError> {
        self.fields.validate(timestamp).inspect_err(|err| {
            self.show_status(StatusKind::Error, err.to_string());
        })
    }

    /// Finish a submission the transport accepted: show the success message
    /// and clear the form. Returns the generation to pass to [`Self::hide_status`]
    /// once [`STATUS_HIDE_DELAY`] has elapsed.
    pub fn complete(&mut self) -> u64 {
        self.fields = ContactFields::default();
        self.show_status(StatusKind::Success, SUCCESS_MESSAGE)
    }
}
