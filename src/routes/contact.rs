use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, ResponseError};
use anyhow::Context;

use crate::domain::{ContactRequest, EmailAddress, SubmissionPayload};
use crate::email_client::{Email, EmailClient};
use crate::notification::Notification;
use crate::utils::error_chain_fmt;

/// The address contact notifications are delivered to.
pub struct ContactInbox(pub EmailAddress);

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Forwards a contact form submission to the site owner's inbox.
#[tracing::instrument(
    name = "Relaying a contact submission",
    skip(payload, email_client, inbox),
    fields(
        sender_email = %payload.email,
        sender_name = %payload.name
    )
)]
#[post("/contact")]
pub async fn relay_contact(
    payload: web::Json<SubmissionPayload>,
    email_client: web::Data<EmailClient>,
    inbox: web::Data<ContactInbox>,
) -> Result<HttpResponse, ContactError> {
    let request: ContactRequest = payload
        .into_inner()
        .try_into()
        .map_err(ContactError::ValidationError)?;

    send_notification(&email_client, &inbox.0, &request)
        .await
        .context("Failed to send the contact notification email.")?;

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(name = "Send contact notification", skip(email_client, inbox, request))]
async fn send_notification(
    email_client: &EmailClient,
    inbox: &EmailAddress,
    request: &ContactRequest,
) -> Result<(), anyhow::Error> {
    let notification = Notification::render(request);
    email_client
        .send_email(Email {
            recipient: inbox,
            reply_to: &request.email,
            subject: &notification.subject,
            html_content: &notification.html_body,
            text_content: &notification.text_body,
        })
        .await
}
