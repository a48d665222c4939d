mod contact;
mod health;

pub use contact::{relay_contact, ContactError, ContactInbox};
pub use health::health_check;
