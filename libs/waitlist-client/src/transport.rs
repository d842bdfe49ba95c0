use async_trait::async_trait;
use waitlist_types::WaitlistSubmission;

use crate::error::ClientError;

/// Raw reply to a submission: HTTP status and unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries one submission to the waitlist endpoint.
///
/// An `Err` means no response was received at all; any HTTP status,
/// including errors, comes back as `Ok`.
#[async_trait]
pub trait WaitlistTransport: Send + Sync {
    async fn post_submission(
        &self,
        submission: &WaitlistSubmission,
    ) -> Result<TransportResponse, ClientError>;
}
