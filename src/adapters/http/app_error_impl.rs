use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{ApiResponse, ErrorCode};

use crate::{app_error::AppError, domain::schema::CREATE_TABLE_SQL};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiResponse::message("Method not allowed"),
            ),
            AppError::MissingFields(ref fields) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::message("Missing required fields").with_missing_fields(fields),
            ),
            AppError::InvalidInput(ref msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::message(msg.clone()).with_error_code(ErrorCode::InvalidInput.as_str()),
            ),
            AppError::EmailExists => (
                StatusCode::BAD_REQUEST,
                ApiResponse::message("This email is already registered on our waitlist")
                    .with_error_code(ErrorCode::EmailExists.as_str()),
            ),
            AppError::TableNotFound { ref details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::message(r#"Database table not found. Please create the "waitlist" table."#)
                    .with_error_code(ErrorCode::TableNotFound.as_str())
                    .with_details(details.clone())
                    .with_sql(CREATE_TABLE_SQL),
            ),
            AppError::Store {
                ref code,
                ref details,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::message("Error saving to waitlist")
                    .with_error_code(code.clone())
                    .with_details(details.clone()),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::message("Database error")
                    .with_error_code(ErrorCode::DatabaseError.as_str()),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::message("Invalid credentials")
                    .with_error_code(ErrorCode::InvalidCredentials.as_str()),
            ),
            AppError::Internal(ref details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::message("Error submitting to waitlist").with_details(details.clone()),
            ),
        };

        // Log the error before it gets converted into a status response.
        if status.is_server_error() {
            tracing::error!(error = ?self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = ?self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}
