use once_cell::sync::Lazy;
use regex::Regex;

use super::SubmissionPayload;

// Word characters are ASCII only; the regex crate's `\w` would also match Unicode letters.
// The outer group is optional, so the pattern on its own also accepts "".
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,6})?$")
        .expect("Email pattern failed to compile")
});

/// Returns `true` when `email` matches the pattern accepted by the contact form.
///
/// Note that the empty string matches. [`ContactForm::validate`] rejects empty
/// addresses before this check runs.
pub fn email_pattern_matches(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// The first problem found with a contact form. `Display` is the message shown
/// to the user.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your message")]
    MissingMessage,
}

/// The current state of the contact form's three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks the fields in order (name, email, email format, message) and
    /// stops at the first failure.
    ///
    /// Presence checks compare against the empty string only, so a field made
    /// of whitespace counts as filled in.
    pub fn validate(&self) -> Result<SubmissionPayload, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !email_pattern_matches(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(SubmissionPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}
