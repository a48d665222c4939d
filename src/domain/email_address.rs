use validator::validate_email;

/// A syntactically valid email address. Used for the relay's sender and inbox
/// as well as for the visitor who filled in the form.
///
/// # Examples
/// ```
/// use contact_form::domain::EmailAddress;
///
/// let email = EmailAddress::parse("jane@example.com".to_string()).unwrap();
/// assert_eq!("jane@example.com", email.as_ref());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Return `Ok` with a valid `EmailAddress` when `s` is a valid email address.
    /// Otherwise, returns `Err` with an error message describing the problem.
    pub fn parse(s: String) -> Result<Self, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
