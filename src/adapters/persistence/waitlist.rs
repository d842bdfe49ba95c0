use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::StoreError,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistEntryDb {
    id: i32,
    name: String,
    email: String,
    user_type: String,
    agreed_to_terms: bool,
    created_at: DateTime<Utc>,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            user_type: row.user_type,
            agreed_to_terms: row.agreed_to_terms,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM waitlist WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool())
                .await?;
        Ok(exists)
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        sqlx::query(
            r#"
                INSERT INTO waitlist (name, email, user_type, agreed_to_terms)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.email)
        .bind(&entry.user_type)
        .bind(entry.agreed_to_terms)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn list_recent(&self) -> Result<Vec<WaitlistEntry>, StoreError> {
        let rows = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                SELECT id, name, email, user_type, agreed_to_terms, created_at
                FROM waitlist
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(WaitlistEntry::from).collect())
    }
}
