use std::{collections::BTreeMap, sync::Arc};

use chrono::DateTime;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use time::Duration;
use tracing::{info, instrument, warn};
use waitlist_types::{AdminSession, UserType, WaitlistEntryView, WaitlistOverview};

use crate::{
    app_error::{AppError, AppResult},
    application::jwt,
    use_cases::waitlist::WaitlistRepo,
};

const ADMIN_SUBJECT: &str = "admin";

/// Admin login and the read-only waitlist listing.
#[derive(Clone)]
pub struct AdminUseCases {
    repo: Arc<dyn WaitlistRepo>,
    password: SecretString,
    jwt_secret: SecretString,
    session_ttl: Duration,
}

impl AdminUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        password: SecretString,
        jwt_secret: SecretString,
        session_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            password,
            jwt_secret,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    #[instrument(skip_all)]
    pub async fn login(&self, password: &str) -> AppResult<AdminSession> {
        // Compare fixed-length digests so timing does not depend on the prefix match.
        let supplied = Sha256::digest(password.as_bytes());
        let expected = Sha256::digest(self.password.expose_secret().as_bytes());
        if supplied != expected {
            warn!("Admin login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let (token, exp) = jwt::issue(ADMIN_SUBJECT, &self.jwt_secret, self.session_ttl)?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AppError::Internal("session expiry out of range".into()))?;

        info!(%expires_at, "Admin session issued");
        Ok(AdminSession { token, expires_at })
    }

    pub fn authorize(&self, token: &str) -> AppResult<()> {
        let claims = jwt::verify(token, &self.jwt_secret)?;
        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::InvalidCredentials);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn overview(&self) -> AppResult<WaitlistOverview> {
        let entries = self.repo.list_recent().await?;

        // Form categories always show up, even at zero; free-text labels are counted as stored.
        let mut by_user_type: BTreeMap<String, usize> = UserType::ALL
            .iter()
            .map(|user_type| (user_type.as_str().to_string(), 0))
            .collect();
        for entry in &entries {
            *by_user_type.entry(entry.user_type.clone()).or_insert(0) += 1;
        }

        Ok(WaitlistOverview {
            total: entries.len(),
            by_user_type,
            entries: entries.into_iter().map(WaitlistEntryView::from).collect(),
        })
    }
}
