//! Request/Response DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form field carrying the client credential digest
pub const PRE_TOKEN_FIELD: &str = "pre-token";

/// Login form
#[derive(Debug, Default, Deserialize)]
pub struct AuthForm {
    #[serde(rename = "pre-token", default)]
    pub pre_token: String,
}

/// Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub cookie: BTreeMap<String, String>,
}

/// Work submission
#[derive(Debug, Deserialize)]
pub struct WorkDoneRequest {
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// `GET /api/work` query string
#[derive(Debug, Default, Deserialize)]
pub struct WorkQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
