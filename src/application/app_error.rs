use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered")]
    EmailExists,

    #[error("Waitlist table not found: {details}")]
    TableNotFound { details: String },

    #[error("Store error {code}: {details}")]
    Store { code: String, details: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Storage failures, classified by what callers need to tell apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert hit the unique constraint on `email`.
    #[error("unique violation: {message}")]
    UniqueViolation { message: String },

    /// The `waitlist` relation does not exist.
    #[error("undefined table: {message}")]
    UndefinedTable { message: String },

    /// Anything else. `code` is the SQLSTATE when the store reported one.
    #[error("database error ({}): {message}", code.as_deref().unwrap_or("no code"))]
    Database {
        code: Option<String>,
        message: String,
    },
}

impl StoreError {
    pub fn message(&self) -> &str {
        match self {
            StoreError::UniqueViolation { message }
            | StoreError::UndefinedTable { message }
            | StoreError::Database { message, .. } => message,
        }
    }
}

/// Read paths. Inserts classify `StoreError` themselves.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UndefinedTable { message } => AppError::TableNotFound { details: message },
            other => AppError::Database(other.message().to_string()),
        }
    }
}
