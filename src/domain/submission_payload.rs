use serde::{Deserialize, Serialize};

/// The JSON body posted by the contact form and received by the relay.
///
/// Fields serialize in declaration order, so a payload always goes over the
/// wire as `{"name":..,"email":..,"message":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}
