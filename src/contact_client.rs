use reqwest::Client;
use url::Url;

use crate::domain::{ContactForm, ValidationError};

/// Shown to the user once a submission went through.
pub const SUCCESS_MESSAGE: &str = "Success!";

/// Why a submission did not go through. `Display` is the message to show the user.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error - something went wrong")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::utils::error_chain_fmt(self, f)
    }
}

/// Submits the contact form to a fixed endpoint.
///
/// Cloning is cheap and clones share a connection pool. Nothing stops two
/// submissions of the same form from being in flight at once.
#[derive(Clone)]
pub struct ContactFormClient {
    http_client: Client,
    endpoint: Url,
}

impl ContactFormClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    /// Validates `form` and posts it as JSON to the endpoint.
    ///
    /// The form is cleared only when the endpoint answers with a 2xx status.
    /// Validation failures never reach the network. Any other failure is
    /// reported as [`SubmissionError::Transport`] and leaves the form as it was.
    #[tracing::instrument(
        name = "Submitting contact form",
        skip(self, form),
        fields(
            endpoint = %self.endpoint,
            sender_email = %form.email,
            sender_name = %form.name
        )
    )]
    pub async fn submit(&self, form: &mut ContactForm) -> Result<(), SubmissionError> {
        let payload = form.validate().map_err(|e| {
            tracing::info!("Contact form rejected: {}", e);
            e
        })?;

        self.http_client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!("Failed to submit contact form: {:?}", e);
                SubmissionError::Transport(e)
            })?;

        tracing::info!("Contact form submitted");
        form.reset();
        Ok(())
    }
}
