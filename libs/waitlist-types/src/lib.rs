//! Wire types shared by the waitlist API and its clients.
//!
//! This crate provides:
//! - The submission payload sent by the signup form (`WaitlistSubmission`)
//! - The JSON body returned by every API endpoint (`ApiResponse`)
//! - Error codes carried in `errorCode`
//! - The user category offered by the form (`UserType`)
//! - Admin session and listing bodies

mod admin;
mod errors;
mod requests;
mod responses;
mod user_type;

pub use admin::{AdminLoginRequest, AdminSession, WaitlistEntryView, WaitlistOverview};
pub use errors::ErrorCode;
pub use requests::WaitlistSubmission;
pub use responses::ApiResponse;
pub use user_type::UserType;
