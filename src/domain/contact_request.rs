use super::{EmailAddress, MessageBody, SenderName, SubmissionPayload};

/// A submission the relay has accepted and is willing to forward.
#[derive(Debug)]
pub struct ContactRequest {
    pub name: SenderName,
    pub email: EmailAddress,
    pub message: MessageBody,
}

impl TryFrom<SubmissionPayload> for ContactRequest {
    type Error = String;

    fn try_from(payload: SubmissionPayload) -> Result<Self, Self::Error> {
        let name = SenderName::parse(payload.name)?;
        let email = EmailAddress::parse(payload.email)?;
        let message = MessageBody::parse(payload.message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}
