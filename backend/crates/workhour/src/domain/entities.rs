//! Domain Entities
//!
//! These are also the stored document shapes (camelCase fields).

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::value_objects::WorkHours;

/// Cookies last seen with a `SESSIONID`, keyed by that id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub cookie: BTreeMap<String, String>,
}

/// One submitted block of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub user_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recorded_at_ms: i64,
}

impl WorkEntry {
    pub fn new(user_id: String, date: NaiveDate, hours: WorkHours, note: Option<String>) -> Self {
        Self {
            user_id,
            date,
            hours: hours.get(),
            note,
            recorded_at_ms: Utc::now().timestamp_millis(),
        }
    }
}

/// Account able to sign in.
///
/// `pre_token` is the credential digest produced by the web client
/// (`sha1(email + password)`); the server only compares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub pre_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
