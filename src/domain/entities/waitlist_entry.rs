use chrono::{DateTime, Utc};
use waitlist_types::WaitlistEntryView;

/// A stored waitlist signup. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub agreed_to_terms: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated signup about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub agreed_to_terms: bool,
}

impl From<WaitlistEntry> for WaitlistEntryView {
    fn from(entry: WaitlistEntry) -> Self {
        WaitlistEntryView {
            id: entry.id,
            name: entry.name,
            email: entry.email,
            user_type: entry.user_type,
            agreed_to_terms: entry.agreed_to_terms,
            created_at: entry.created_at,
        }
    }
}
