use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/admin/session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// Issued admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A stored waitlist entry as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub agreed_to_terms: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `GET /api/admin/waitlist`: entries newest first plus per-category counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistOverview {
    pub total: usize,
    pub by_user_type: BTreeMap<String, usize>,
    pub entries: Vec<WaitlistEntryView>,
}
