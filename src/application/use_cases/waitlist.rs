use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::{
    app_error::{AppError, AppResult, StoreError},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// Code reported when the store gave none.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError>;
    /// All entries, newest first.
    async fn list_recent(&self) -> Result<Vec<WaitlistEntry>, StoreError>;
}

/// Submission as received, before required-field checks.
///
/// Consent is already coerced to a boolean; it is never a required field.
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub agreed_to_terms: bool,
}

impl SubmissionInput {
    /// Names (as sent on the wire) of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("userType", &self.user_type),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(field, _)| field)
        .collect()
    }

    pub fn into_entry(self) -> AppResult<NewWaitlistEntry> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        Ok(NewWaitlistEntry {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            user_type: self.user_type.unwrap_or_default(),
            agreed_to_terms: self.agreed_to_terms,
        })
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Adds one signup.
    ///
    /// The duplicate lookup is best effort: a failing lookup is logged and the
    /// insert still runs. The unique constraint hit by the insert is what
    /// actually rejects duplicates.
    #[instrument(skip(self, input), fields(email = input.email.as_deref().unwrap_or_default()))]
    pub async fn submit(&self, input: SubmissionInput) -> AppResult<()> {
        let entry = input.into_entry()?;

        info!(entry = ?entry, "Attempting to insert waitlist entry");

        match self.repo.email_exists(&entry.email).await {
            Ok(true) => {
                warn!("Email already on the waitlist");
                return Err(AppError::EmailExists);
            }
            Ok(false) => {}
            Err(err) => {
                error!(error = %err, "Error checking for existing email, continuing with insert");
            }
        }

        if let Err(err) = self.repo.insert(&entry).await {
            error!(error = %err, "Error inserting waitlist entry");
            return Err(match err {
                StoreError::UniqueViolation { .. } => AppError::EmailExists,
                StoreError::UndefinedTable { message } => AppError::TableNotFound { details: message },
                StoreError::Database { code, message } => AppError::Store {
                    code: code.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
                    details: message,
                },
            });
        }

        info!("Successfully added to waitlist");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryWaitlistRepo, create_test_input};

    fn use_cases(repo: &Arc<InMemoryWaitlistRepo>) -> WaitlistUseCases {
        WaitlistUseCases::new(repo.clone() as Arc<dyn WaitlistRepo>)
    }

    #[test]
    fn missing_fields_lists_wire_names() {
        let input = SubmissionInput {
            name: Some("Ada".into()),
            email: Some(String::new()),
            user_type: None,
            agreed_to_terms: true,
        };
        assert_eq!(input.missing_fields(), vec!["email", "userType"]);
    }

    #[test]
    fn consent_is_not_required() {
        let entry = create_test_input(|i| i.agreed_to_terms = false)
            .into_entry()
            .unwrap();
        assert!(!entry.agreed_to_terms);
    }

    #[tokio::test]
    async fn submit_inserts_new_entry() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());

        use_cases(&repo)
            .submit(create_test_input(|_| {}))
            .await
            .unwrap();

        let entries = repo.get_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "ada@example.com");
        assert_eq!(entries[0].user_type, "developer");
        assert!(entries[0].agreed_to_terms);
    }

    #[tokio::test]
    async fn submit_missing_user_type_touches_nothing() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());

        let result = use_cases(&repo)
            .submit(create_test_input(|i| i.user_type = None))
            .await;

        assert!(matches!(result, Err(AppError::MissingFields(f)) if f == vec!["userType"]));
        assert_eq!(repo.lookup_count(), 0);
        assert_eq!(repo.insert_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_caught_by_lookup_skips_insert() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let uc = use_cases(&repo);

        uc.submit(create_test_input(|_| {})).await.unwrap();
        let result = uc.submit(create_test_input(|i| i.name = Some("Other".into()))).await;

        assert!(matches!(result, Err(AppError::EmailExists)));
        assert_eq!(repo.insert_count(), 1);
        assert_eq!(repo.get_all().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_caught_by_constraint_is_email_exists() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let uc = use_cases(&repo);
        uc.submit(create_test_input(|_| {})).await.unwrap();

        // A concurrent insert the lookup could not see.
        repo.hide_existing_from_lookups();
        let result = uc.submit(create_test_input(|_| {})).await;

        assert!(matches!(result, Err(AppError::EmailExists)));
        assert_eq!(repo.insert_count(), 2);
        assert_eq!(repo.get_all().len(), 1);
    }

    #[tokio::test]
    async fn failing_lookup_is_swallowed() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        repo.fail_lookups();

        use_cases(&repo)
            .submit(create_test_input(|_| {}))
            .await
            .unwrap();

        assert_eq!(repo.lookup_count(), 1);
        assert_eq!(repo.get_all().len(), 1);
    }

    #[tokio::test]
    async fn missing_table_is_table_not_found() {
        let repo = Arc::new(InMemoryWaitlistRepo::without_table());

        let result = use_cases(&repo).submit(create_test_input(|_| {})).await;

        assert!(matches!(
            result,
            Err(AppError::TableNotFound { details }) if details.contains("does not exist")
        ));
    }

    #[tokio::test]
    async fn other_insert_failure_keeps_raw_code() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        repo.fail_inserts_with(Some("23502"), "null value in column \"name\"");

        let result = use_cases(&repo).submit(create_test_input(|_| {})).await;

        assert!(matches!(
            result,
            Err(AppError::Store { code, details }) if code == "23502" && details.contains("null value")
        ));
    }

    #[tokio::test]
    async fn insert_failure_without_code_is_unknown_error() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        repo.fail_inserts_with(None, "pool timed out while waiting for an open connection");

        let result = use_cases(&repo).submit(create_test_input(|_| {})).await;

        assert!(matches!(
            result,
            Err(AppError::Store { code, .. }) if code == UNKNOWN_ERROR_CODE
        ));
    }
}
