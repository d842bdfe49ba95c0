//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - An in-memory `WaitlistRepo` with injectable store failures
//! - `TestAppStateBuilder` for constructing `AppState` around the mocks

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
