//! Client side of the waitlist signup flow.
//!
//! # Features
//!
//! - **Form state** - `WaitlistForm` holds the field values and the
//!   submission state, validates locally and maps server responses to messages
//! - **Transport seam** - `WaitlistTransport` carries one submission to the API
//! - **HTTP client** - `WaitlistClient`, a `reqwest` transport (feature `client`)
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_client::{SubmissionState, WaitlistClient, WaitlistClientConfig, WaitlistForm};
//!
//! let client = WaitlistClient::new(WaitlistClientConfig {
//!     base_url: "https://example.com".parse()?,
//!     timeout: None,
//! })?;
//!
//! let mut form = WaitlistForm::new();
//! form.name = "Ada".into();
//! form.email = "ada@example.com".into();
//! form.agreed_to_terms = true;
//!
//! if let SubmissionState::Error(message) = form.submit(&client).await {
//!     eprintln!("{message}");
//! }
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod form;
mod transport;

#[cfg(feature = "client")]
pub use client::{WaitlistClient, WaitlistClientConfig};
pub use error::ClientError;
pub use form::{SubmissionState, WaitlistForm, messages};
pub use transport::{TransportResponse, WaitlistTransport};

pub use waitlist_types::{ApiResponse, ErrorCode, UserType, WaitlistSubmission};
