//! Admin session and waitlist listing routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use waitlist_types::AdminLoginRequest;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

pub const SESSION_COOKIE: &str = "admin_session";
const COOKIE_PATH: &str = "/api/admin";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(create_session).delete(end_session))
        .route("/waitlist", get(list_waitlist))
}

async fn create_session(
    State(app_state): State<AppState>,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let admin = app_state.admin_use_cases.clone();
    let session = admin.login(&payload.password).await?;

    let cookie = Cookie::build((SESSION_COOKIE, session.token.clone()))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path(COOKIE_PATH)
        .max_age(admin.session_ttl())
        .build();

    let mut headers = HeaderMap::new();
    append_cookie(&mut headers, cookie)?;

    Ok((StatusCode::OK, headers, Json(session)))
}

async fn end_session() -> AppResult<(StatusCode, HeaderMap)> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path(COOKIE_PATH)
        .max_age(time::Duration::seconds(0))
        .build();

    let mut headers = HeaderMap::new();
    append_cookie(&mut headers, cookie)?;

    Ok((StatusCode::NO_CONTENT, headers))
}

async fn list_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let token = session_token(&headers, &jar).ok_or(AppError::InvalidCredentials)?;
    app_state.admin_use_cases.authorize(&token)?;

    let overview = app_state.admin_use_cases.overview().await?;
    Ok(Json(overview))
}

/// Bearer header first, then the session cookie.
fn session_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

fn append_cookie(headers: &mut HeaderMap, cookie: Cookie<'_>) -> Result<(), AppError> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|_| AppError::Internal("Failed to build cookie header".into()))?;
    headers.append("set-cookie", value);
    Ok(())
}
