use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use waitlist_types::ApiResponse;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::SubmissionInput,
};

/// Body of `POST /waitlist`. Fields stay loosely typed here; required fields
/// are checked by the use case so the 400 can name what is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPayload {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    email: Value,
    #[serde(default)]
    user_type: Value,
    #[serde(default)]
    agreed_to_terms: Value,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(submit_entry).fallback(method_not_allowed))
}

async fn submit_entry(
    State(app_state): State<AppState>,
    payload: Result<Json<SubmitPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    info!(payload = ?payload, "Waitlist submission received");

    let input = SubmissionInput {
        name: text_field("name", &payload.name)?,
        email: text_field("email", &payload.email)?,
        user_type: text_field("userType", &payload.user_type)?,
        agreed_to_terms: is_truthy(&payload.agreed_to_terms),
    };

    app_state.waitlist_use_cases.submit(input).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Successfully added to waitlist")),
    ))
}

async fn method_not_allowed(method: Method) -> AppError {
    warn!(%method, "Unsupported method on waitlist endpoint");
    AppError::MethodNotAllowed
}

/// Text field from a loosely typed client. Falsy values are treated as
/// absent, numbers and `true` are kept as their text, and arrays or objects
/// are rejected.
fn text_field(field: &str, value: &Value) -> AppResult<Option<String>> {
    if !is_truthy(value) {
        return Ok(None);
    }
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(AppError::InvalidInput(format!(
            "Field `{field}` must be a string"
        ))),
    }
}

/// Boolean coercion for loosely typed clients: null, false, 0, NaN and ""
/// are false, everything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
