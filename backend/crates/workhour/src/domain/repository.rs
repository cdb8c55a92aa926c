//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use std::collections::BTreeMap;

use crate::domain::entities::{SessionRecord, User, WorkEntry};
use crate::domain::value_objects::DateRange;
use crate::error::WorkhourResult;

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store `cookie` as the cookie map of `session_id`, replacing any previous one
    async fn upsert_session(
        &self,
        session_id: &str,
        cookie: &BTreeMap<String, String>,
    ) -> WorkhourResult<()>;

    async fn find_session(&self, session_id: &str) -> WorkhourResult<Option<SessionRecord>>;
}

/// Work repository trait
#[trait_variant::make(WorkRepository: Send)]
pub trait LocalWorkRepository {
    async fn record_work(&self, entry: &WorkEntry) -> WorkhourResult<()>;

    /// Entries of one user inside `range`, ordered by date then submission time
    async fn query_work(&self, user_id: &str, range: &DateRange)
    -> WorkhourResult<Vec<WorkEntry>>;

    /// Every entry of every user
    async fn all_work(&self) -> WorkhourResult<Vec<WorkEntry>>;
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn find_by_credentials(&self, pre_token: &str) -> WorkhourResult<Option<User>>;
}
