use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes returned in the `errorCode` field of API responses.
///
/// Storage failures without a dedicated code carry the raw SQLSTATE instead,
/// so `errorCode` on the wire is a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmailExists,
    TableNotFound,
    InvalidCredentials,
    InvalidInput,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmailExists => "EMAIL_EXISTS",
            ErrorCode::TableNotFound => "TABLE_NOT_FOUND",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// True when a raw `errorCode` string names this code.
    pub fn matches(&self, raw: &str) -> bool {
        self.as_str() == raw
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
