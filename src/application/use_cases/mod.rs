pub mod admin;
pub mod waitlist;
