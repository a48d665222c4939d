use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 4096;

/// The free-text message of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Rejects messages that are empty, whitespace-only or longer than 4096
    /// graphemes.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("The message is empty.".to_string());
        }
        if s.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(format!(
                "The message is longer than {} characters.",
                MAX_GRAPHEMES
            ));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
