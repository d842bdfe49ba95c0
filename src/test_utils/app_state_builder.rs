//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! around an in-memory `WaitlistRepo`.

use std::{net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::{
        admin::AdminUseCases,
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};

pub const TEST_ADMIN_PASSWORD: &str = "test_admin_password";
pub const TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::without_table());
/// let app_state = TestAppStateBuilder::new().with_repo(repo.clone()).build();
/// ```
pub struct TestAppStateBuilder {
    repo: Arc<InMemoryWaitlistRepo>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
        }
    }

    /// Use a shared repo so the test can inspect it afterwards.
    pub fn with_repo(mut self, repo: Arc<InMemoryWaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    pub fn build(self) -> AppState {
        let config = Arc::new(AppConfig {
            database_url: SecretString::new(String::new().into()),
            database_max_connections: 1,
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            admin_password: SecretString::new(TEST_ADMIN_PASSWORD.into()),
            jwt_secret: SecretString::new(TEST_JWT_SECRET.into()),
            admin_session_ttl: Duration::minutes(30),
            log_file: None,
        });

        let repo = self.repo as Arc<dyn WaitlistRepo>;
        let waitlist_use_cases = WaitlistUseCases::new(repo.clone());
        let admin_use_cases = AdminUseCases::new(
            repo,
            config.admin_password.clone(),
            config.jwt_secret.clone(),
            config.admin_session_ttl,
        );

        AppState {
            config,
            waitlist_use_cases: Arc::new(waitlist_use_cases),
            admin_use_cases: Arc::new(admin_use_cases),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
