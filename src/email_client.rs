use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use url::Url;

use crate::domain::EmailAddress;

/// An email client that delivers contact notifications through the Postmark
/// email API.
pub struct EmailClient {
    sender: EmailAddress,
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
}

/// What goes into a single notification email.
pub struct Email<'a> {
    pub recipient: &'a EmailAddress,
    pub reply_to: &'a EmailAddress,
    pub subject: &'a str,
    pub html_content: &'a str,
    pub text_content: &'a str,
}

impl EmailClient {
    /// Creates an email client. Emails will be sent from `sender`.
    ///
    /// `base_url` is where the email API lives and `authorization_token` is
    /// attached to every request. Requests that take longer than `timeout` fail.
    pub fn new(
        base_url: Url,
        sender: EmailAddress,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            sender,
            base_url,
            http_client,
            authorization_token,
        })
    }

    /// Sends `email`. Replies to it go to `email.reply_to`.
    ///
    /// Returns an `Err` if the API can't be reached or answers with a non-2xx status.
    #[tracing::instrument(
        name = "Sending notification email",
        skip(self, email),
        fields(recipient = %email.recipient, reply_to = %email.reply_to)
    )]
    pub async fn send_email(&self, email: Email<'_>) -> Result<(), anyhow::Error> {
        let url = self.base_url.join("email")?;
        let body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: email.recipient.as_ref(),
            reply_to: email.reply_to.as_ref(),
            subject: email.subject,
            html_body: email.html_content,
            text_body: email.text_content,
        };

        self.http_client
            .post(url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// The format of a request body required by the Postmark email send API
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
