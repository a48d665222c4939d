use unicode_segmentation::UnicodeSegmentation;

/// The name of whoever filled in the contact form. Enforces invariants of a
/// valid name, so if you have an instance of this, the name fits on a single
/// subject line.
///
/// # Examples
/// ```
/// use contact_form::domain::SenderName;
///
/// let name = SenderName::parse("Jane Doe".to_string()).unwrap();
/// assert_eq!("Jane Doe", name.as_ref());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    /// Returns `Ok` with a `SenderName` if the name is valid, otherwise returns
    /// `Err` with an error message.
    ///
    /// A name is invalid if:
    /// * It is all whitespace (or empty)
    /// * It has more than 256 graphemes
    /// * Contains a control character such as a line break
    ///
    /// Punctuation is fine: `Jane (Acme Corp)` and `AC/DC Ltd` are valid names.
    pub fn parse(s: String) -> Result<Self, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;
        let contains_control_characters = s.chars().any(char::is_control);

        if is_empty_or_whitespace || is_too_long || contains_control_characters {
            Err(format!("{} is not a valid sender name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
