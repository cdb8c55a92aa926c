//! Authenticate Use Case
//!
//! Exchanges the client credential digest for a session token.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::session_token::SessionTokens;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{WorkhourError, WorkhourResult};

/// Authenticate output
#[derive(Debug)]
pub struct AuthenticateOutput {
    pub token: String,
    pub user_id: String,
    /// Cookies previously tracked for this session (empty on first login)
    pub cookie: BTreeMap<String, String>,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    tokens: Arc<SessionTokens>,
}

impl<U, S> AuthenticateUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, tokens: Arc<SessionTokens>) -> Self {
        Self {
            user_repo,
            session_repo,
            tokens,
        }
    }

    pub async fn execute(&self, pre_token: &str) -> WorkhourResult<AuthenticateOutput> {
        let pre_token = pre_token.trim();
        if pre_token.is_empty() {
            return Err(WorkhourError::MissingCredentials);
        }

        let user = self
            .user_repo
            .find_by_credentials(pre_token)
            .await?
            .ok_or(WorkhourError::InvalidCredentials)?;

        let token = self.tokens.issue(&user.user_id);

        let cookie = self
            .session_repo
            .find_session(&token)
            .await?
            .map(|record| record.cookie)
            .unwrap_or_default();

        tracing::info!(user_id = %user.user_id, restored = !cookie.is_empty(), "User signed in");

        Ok(AuthenticateOutput {
            token,
            user_id: user.user_id,
            cookie,
        })
    }
}
