//! Auth Controller

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use platform::cookie::{CookieConfig, set_cookie_header};
use std::sync::Arc;

use crate::application::{AuthenticateUseCase, SessionTokens};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{WorkhourError, WorkhourResult};
use crate::presentation::dto::AuthResponse;
use crate::presentation::extract::LoginForm;

#[derive(Clone)]
pub struct AuthController<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<SessionTokens>,
    pub cookie: Arc<CookieConfig>,
}

impl<R> AuthController<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    /// POST /api/auth
    pub async fn auth(
        State(controller): State<Self>,
        LoginForm(form): LoginForm,
    ) -> WorkhourResult<impl IntoResponse> {
        let use_case = AuthenticateUseCase::new(
            controller.repo.clone(),
            controller.repo.clone(),
            controller.tokens.clone(),
        );

        let output = use_case.execute(&form.pre_token).await?;

        let set_cookie = set_cookie_header(&controller.cookie, &output.token).ok_or_else(|| {
            WorkhourError::Internal("session token is not a valid cookie value".to_string())
        })?;

        Ok((
            StatusCode::OK,
            [(header::SET_COOKIE, set_cookie)],
            Json(AuthResponse {
                token: output.token,
                user_id: output.user_id,
                cookie: output.cookie,
            }),
        ))
    }
}
