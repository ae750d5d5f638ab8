//! Error types.
//!
//! Only form validation errors ever reach the user, through a toast. DOM and
//! JavaScript failures are logged and swallowed at the adapter boundary.

use std::fmt;

use thiserror::Error;

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The `name` attribute of the matching form control.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the landing page.
#[derive(Error, Debug)]
pub enum LandingError {
    /// A required form field was empty or absent.
    #[error("missing required field: {0}")]
    MissingField(FormField),

    /// The email address failed the structural check.
    #[error("invalid email address")]
    InvalidEmail,

    /// A JavaScript call threw.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// The embedded page config could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LandingError {
    /// Text shown to the visitor in the error toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            LandingError::MissingField(_) => "Please fill in all fields",
            LandingError::InvalidEmail => "Please enter a valid email address",
            LandingError::JavaScript(_) | LandingError::Config(_) => {
                "Something went wrong, please try again"
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for LandingError {
    fn from(js_val: wasm_bindgen::JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{js_val:?}"));
        LandingError::JavaScript(message)
    }
}

/// Result type for landing page operations.
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LandingError::MissingField(FormField::Name).user_message(),
            "Please fill in all fields"
        );
        assert_eq!(
            LandingError::InvalidEmail.user_message(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_display_names_field() {
        let err = LandingError::MissingField(FormField::Email);
        assert_eq!(err.to_string(), "missing required field: email");
    }
}
