//! Track Session Use Case
//!
//! Persists the cookies of every request that carries a `SESSIONID`.

use axum::http::HeaderMap;
use platform::cookie::{collect_cookies, extract_cookie};
use std::sync::Arc;

use crate::application::config::{SESSION_COOKIE_NAME, SessionPolicy};
use crate::domain::repository::SessionRepository;
use crate::error::{WorkhourError, WorkhourResult};

/// Track session use case
pub struct TrackSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    policy: SessionPolicy,
}

impl<S> TrackSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, policy: SessionPolicy) -> Self {
        Self {
            session_repo,
            policy,
        }
    }

    /// Upsert `{ sessionId, cookie }` for a non-empty `SESSIONID`.
    ///
    /// Returns whether a record was written. Store failures are swallowed
    /// under [`SessionPolicy::BestEffort`].
    pub async fn execute(&self, headers: &HeaderMap) -> WorkhourResult<bool> {
        let Some(session_id) = extract_cookie(headers, SESSION_COOKIE_NAME) else {
            return Ok(false);
        };
        if session_id.is_empty() {
            return Ok(false);
        }

        let cookie = collect_cookies(headers);

        match self.session_repo.upsert_session(&session_id, &cookie).await {
            Ok(()) => {
                tracing::debug!(cookies = cookie.len(), "Session tracked");
                Ok(true)
            }
            Err(WorkhourError::Store(e)) => match self.policy {
                SessionPolicy::BestEffort => {
                    tracing::warn!(error = %e, "Session tracking failed, continuing anyway");
                    Ok(false)
                }
                SessionPolicy::FailRequest => Err(WorkhourError::SessionTracking(e)),
            },
            Err(e) => Err(e),
        }
    }
}
