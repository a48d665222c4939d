//! Turns an accepted contact request into the email sent to the site owner.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::ContactRequest;

const TEXT_TEMPLATE: &str = include_str!("../templates/contact.txt");
const HTML_TEMPLATE: &str = include_str!("../templates/contact.html");

/// The rendered subject and bodies of a contact notification.
#[derive(Debug)]
pub struct Notification {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl Notification {
    pub fn render(request: &ContactRequest) -> Self {
        let name = request.name.as_ref();
        let email = request.email.as_ref();
        let message = request.message.as_ref();

        let text_body = fill_placeholders(
            TEXT_TEMPLATE,
            &[("_name", name), ("_email", email), ("_message", message)],
        );
        let escaped_name = htmlescape::encode_minimal(name);
        let escaped_email = htmlescape::encode_minimal(email);
        let escaped_message = htmlescape::encode_minimal(message);
        let html_body = fill_placeholders(
            HTML_TEMPLATE,
            &[
                ("_name", escaped_name.as_str()),
                ("_email", escaped_email.as_str()),
                ("_message", escaped_message.as_str()),
            ],
        );

        Self {
            subject: format!("New Customer: {}", name),
            text_body,
            html_body,
        }
    }
}

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("_name|_email|_message").expect("Placeholder pattern failed to compile")
});

/// Replaces every placeholder in `template` with its value in one left-to-right
/// pass. Substituted values are copied verbatim and never scanned again.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let placeholder = &caps[0];
            values
                .iter()
                .find(|(name, _)| *name == placeholder)
                .map_or(placeholder, |(_, value)| *value)
                .to_string()
        })
        .into_owned()
}
