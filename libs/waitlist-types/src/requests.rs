use serde::{Deserialize, Serialize};

use crate::UserType;

/// Body of `POST /api/waitlist` as sent by the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub agreed_to_terms: bool,
}
