use sqlx::PgPool;

use crate::app_error::StoreError;

pub mod waitlist;

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for undefined_table.
const UNDEFINED_TABLE: &str = "42P01";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                let code = db_err.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some(UNIQUE_VIOLATION) => StoreError::UniqueViolation { message },
                    Some(UNDEFINED_TABLE) => StoreError::UndefinedTable { message },
                    _ if is_missing_relation(&message) => StoreError::UndefinedTable { message },
                    _ => StoreError::Database { code, message },
                }
            }
            _ => StoreError::Database {
                code: None,
                message: err.to_string(),
            },
        }
    }
}

fn is_missing_relation(message: &str) -> bool {
    message.contains("relation") && message.contains("does not exist")
}
