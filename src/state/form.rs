//! Contact form validation.
//!
//! Presence check on all three fields, then a structural email check:
//! one `@`, a dot somewhere after it, no whitespace. Not RFC validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormField, LandingError, LandingResult};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Raw form values as read from the page. `None` means the control is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Structural email check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the form. Presence is checked before email shape, in form order.
///
/// Values are taken as typed: only an empty or absent field is missing, and
/// the email is matched untrimmed.
pub fn validate(fields: &ContactFields) -> LandingResult<ContactSubmission> {
    let require = |field: FormField| {
        fields
            .get(field)
            .filter(|value| !value.is_empty())
            .ok_or(LandingError::MissingField(field))
    };
    let name = require(FormField::Name)?;
    let email = require(FormField::Email)?;
    let message = require(FormField::Message)?;

    if !is_valid_email(email) {
        return Err(LandingError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
