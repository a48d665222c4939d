mod contact_form;
mod contact_request;
mod email_address;
mod message_body;
mod sender_name;
mod submission_payload;

pub use contact_form::{email_pattern_matches, ContactForm, ValidationError};
pub use contact_request::ContactRequest;
pub use email_address::EmailAddress;
pub use message_body::MessageBody;
pub use sender_name::SenderName;
pub use submission_payload::SubmissionPayload;
