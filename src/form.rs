//! Contact Form - required fields, email syntax, success banner
//!
//! Nothing is sent anywhere: a valid submission clears the form and shows a
//! banner that expires after a configurable duration.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::form::{ContactForm, Field, SubmitOutcome};
//!
//! let mut form = ContactForm::new(Duration::from_secs(3));
//! form.set_value(Field::Name, "Ada");
//! form.set_value(Field::Email, "ada@example.com");
//!
//! match form.submit(Instant::now()) {
//!     SubmitOutcome::Sent => {}
//!     SubmitOutcome::Rejected(errors) => { /* show errors */ }
//! }
//! ```

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ClassList;

/// Banner text after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Check email syntax. Case-insensitive; surrounding whitespace is not allowed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(&email.to_lowercase())
}

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Subject => "Subject is required",
            Field::Message => "Message is required",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Error text shown under the field.
    pub error: Option<&'static str>,
    pub classes: ClassList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Validate raw field values, in field order.
pub fn validate(values: &[&str; 4]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in Field::ALL {
        let value = values[field.index()];
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                message: field.required_message(),
            });
        } else if field == Field::Email && !is_valid_email(value) {
            errors.push(FieldError {
                field,
                message: INVALID_EMAIL_MESSAGE,
            });
        }
    }

    errors
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub message: &'static str,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(Vec<FieldError>),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FieldState; 4],
    banner: Option<SuccessBanner>,
    banner_duration: Duration,
}

impl ContactForm {
    pub fn new(banner_duration: Duration) -> Self {
        Self {
            fields: Default::default(),
            banner: None,
            banner_duration,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn banner(&self) -> Option<&SuccessBanner> {
        self.banner.as_ref()
    }

    /// Validate and, if everything passes, reset the form and show the banner.
    ///
    /// Errors from a previous attempt are cleared first.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        for state in &mut self.fields {
            state.error = None;
            state.classes.remove(ClassList::ERROR);
        }

        let values = [
            self.fields[0].value.as_str(),
            self.fields[1].value.as_str(),
            self.fields[2].value.as_str(),
            self.fields[3].value.as_str(),
        ];
        let errors = validate(&values);

        if !errors.is_empty() {
            for error in &errors {
                let state = &mut self.fields[error.field.index()];
                state.error = Some(error.message);
                state.classes.insert(ClassList::ERROR);
            }
            tracing::debug!(count = errors.len(), "contact form rejected");
            return SubmitOutcome::Rejected(errors);
        }

        for state in &mut self.fields {
            state.value.clear();
        }
        self.banner = Some(SuccessBanner {
            message: SUCCESS_MESSAGE,
            expires_at: now + self.banner_duration,
        });
        tracing::info!("contact form accepted");
        SubmitOutcome::Sent
    }

    /// Drop the banner once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }
    }
}
