//! Work-Hour Error Types
//!
//! Domain-specific error variants that map onto `kernel::error::AppError`
//! for the HTTP response.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use store::StoreError;
use thiserror::Error;

pub type WorkhourResult<T> = Result<T, WorkhourError>;

#[derive(Debug, Error)]
pub enum WorkhourError {
    /// Login form sent without a `pre-token`
    #[error("Missing credentials")]
    MissingCredentials,

    /// No user matches the credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, empty or forged `SESSIONID` cookie
    #[error("A valid session is required")]
    SessionRequired,

    #[error("Invalid work entry: {0}")]
    InvalidWorkEntry(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// Session upsert failed under `SessionPolicy::FailRequest`
    #[error("Session tracking failed: {0}")]
    SessionTracking(#[source] StoreError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkhourError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkhourError::MissingCredentials
            | WorkhourError::InvalidWorkEntry(_)
            | WorkhourError::InvalidRange(_) => ErrorKind::BadRequest,
            WorkhourError::InvalidCredentials | WorkhourError::SessionRequired => {
                ErrorKind::Unauthorized
            }
            WorkhourError::SessionTracking(_) => ErrorKind::ServiceUnavailable,
            WorkhourError::Store(e) if e.is_unavailable() => ErrorKind::ServiceUnavailable,
            WorkhourError::Store(_) | WorkhourError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError; store details stay in the logs
    pub fn to_app_error(&self) -> AppError {
        match self {
            WorkhourError::SessionRequired => AppError::new(self.kind(), self.to_string())
                .with_action("Sign in through POST /api/auth"),
            WorkhourError::SessionTracking(_) | WorkhourError::Store(_) => {
                AppError::new(self.kind(), "Document store error")
            }
            WorkhourError::Internal(_) => AppError::new(self.kind(), "Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WorkhourError::Store(e) | WorkhourError::SessionTracking(e) => {
                tracing::error!(error = %e, "Work-hour store error");
            }
            WorkhourError::Internal(msg) => {
                tracing::error!(message = %msg, "Work-hour internal error");
            }
            WorkhourError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Work-hour request rejected");
            }
        }
    }
}

impl IntoResponse for WorkhourError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
