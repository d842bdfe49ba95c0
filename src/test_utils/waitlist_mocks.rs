//! In-memory mock implementation of `WaitlistRepo`.

use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use chrono::Utc;

use crate::{
    app_error::StoreError,
    domain::{
        entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
        schema::WAITLIST_TABLE,
    },
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Enforces email uniqueness on insert like the real table does, and can be
/// told to misbehave in the ways the endpoint has to handle.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    table_missing: bool,
    hide_existing: AtomicBool,
    fail_lookups: AtomicBool,
    insert_failure: Mutex<Option<StoreError>>,
    lookups: AtomicUsize,
    inserts: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries; ids are reassigned in order.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(i, mut e)| {
                e.id = i as i32 + 1;
                e
            })
            .collect();
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Every query fails the way Postgres does when the relation is absent.
    pub fn without_table() -> Self {
        Self {
            table_missing: true,
            ..Self::default()
        }
    }

    /// Lookups stop seeing stored rows, as with a concurrent insert.
    pub fn hide_existing_from_lookups(&self) {
        self.hide_existing.store(true, Ordering::SeqCst);
    }

    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub fn fail_inserts_with(&self, code: Option<&str>, message: &str) {
        *self.insert_failure.lock().unwrap() = Some(StoreError::Database {
            code: code.map(str::to_string),
            message: message.to_string(),
        });
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn missing_table_error(&self) -> Option<StoreError> {
        self.table_missing.then(|| StoreError::UndefinedTable {
            message: format!(r#"relation "{WAITLIST_TABLE}" does not exist"#),
        })
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.missing_table_error() {
            return Err(err);
        }
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Database {
                code: Some("57014".to_string()),
                message: "canceling statement due to statement timeout".to_string(),
            });
        }
        if self.hide_existing.load(Ordering::SeqCst) {
            return Ok(false);
        }

        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.email == email))
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.missing_table_error() {
            return Err(err);
        }
        if let Some(err) = self.insert_failure.lock().unwrap().clone() {
            return Err(err);
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::UniqueViolation {
                message: r#"duplicate key value violates unique constraint "waitlist_email_key""#
                    .to_string(),
            });
        }

        let stored = WaitlistEntry {
            id: entries.len() as i32 + 1,
            name: entry.name.clone(),
            email: entry.email.clone(),
            user_type: entry.user_type.clone(),
            agreed_to_terms: entry.agreed_to_terms,
            created_at: Utc::now(),
        };
        entries.push(stored);
        Ok(())
    }

    async fn list_recent(&self) -> Result<Vec<WaitlistEntry>, StoreError> {
        if let Some(err) = self.missing_table_error() {
            return Err(err);
        }

        let mut entries = self.get_all();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
