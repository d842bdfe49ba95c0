//! Signup form state.

use tracing::{debug, warn};
use waitlist_types::{ApiResponse, ErrorCode, UserType, WaitlistSubmission};

use crate::transport::WaitlistTransport;

/// Messages shown to the user for each failure path.
pub mod messages {
    pub const VALIDATION: &str = "Please fill in all required fields and agree to the terms.";
    pub const EMAIL_EXISTS: &str = "This email is already registered on our waitlist.";
    pub const UNPARSEABLE_RESPONSE: &str = "Error processing server response";
    pub const TRANSPORT: &str = "An error occurred. Please try again.";
    pub const FALLBACK: &str = "Failed to submit form";
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Field values of the signup form plus its submission state.
#[derive(Debug, Clone, Default)]
pub struct WaitlistForm {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub agreed_to_terms: bool,
    state: SubmissionState,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Checks required fields. On failure the form enters the error state and
    /// `None` is returned; nothing is sent.
    pub fn validate(&mut self) -> Option<WaitlistSubmission> {
        if self.name.is_empty() || self.email.is_empty() || !self.agreed_to_terms {
            self.state = SubmissionState::Error(messages::VALIDATION.to_string());
            return None;
        }

        Some(WaitlistSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            user_type: self.user_type,
            agreed_to_terms: self.agreed_to_terms,
        })
    }

    /// Validates, sends one request and records the outcome.
    pub async fn submit<T>(&mut self, transport: &T) -> &SubmissionState
    where
        T: WaitlistTransport + ?Sized,
    {
        let Some(submission) = self.validate() else {
            return &self.state;
        };

        self.state = SubmissionState::Submitting;
        debug!(email = %submission.email, "Submitting waitlist form");

        let response = match transport.post_submission(&submission).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Waitlist submission failed to send");
                self.state = SubmissionState::Error(messages::TRANSPORT.to_string());
                return &self.state;
            }
        };

        let body: ApiResponse = match serde_json::from_str(&response.body) {
            Ok(body) => body,
            Err(err) => {
                warn!(status = response.status, error = %err, "Unparseable waitlist response");
                self.state = SubmissionState::Error(messages::UNPARSEABLE_RESPONSE.to_string());
                return &self.state;
            }
        };

        debug!(status = response.status, ?body, "Waitlist response");

        if !response.is_success() {
            self.state = SubmissionState::Error(failure_message(body));
            return &self.state;
        }

        self.reset_fields();
        self.state = SubmissionState::Success;
        &self.state
    }

    /// Leaves the success screen so another person can sign up.
    pub fn submit_another(&mut self) {
        if self.state == SubmissionState::Success {
            self.reset_fields();
            self.state = SubmissionState::Idle;
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.user_type = UserType::default();
        self.agreed_to_terms = false;
    }
}

fn failure_message(body: ApiResponse) -> String {
    if body
        .error_code
        .as_deref()
        .is_some_and(|code| ErrorCode::EmailExists.matches(code))
    {
        return messages::EMAIL_EXISTS.to_string();
    }

    if !body.message.is_empty() {
        return body.message;
    }

    body.error_details
        .filter(|details| !details.is_empty())
        .unwrap_or_else(|| messages::FALLBACK.to_string())
}
