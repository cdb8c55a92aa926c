//! Request Extractors

use axum::Form;
use axum::extract::{FromRef, FromRequest, FromRequestParts, Multipart, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::config::SESSION_COOKIE_NAME;
use crate::application::session_token::SessionTokens;
use crate::error::WorkhourError;
use crate::presentation::dto::{AuthForm, PRE_TOKEN_FIELD};

/// User id behind a valid `SESSIONID` token; rejects with 401 otherwise
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<SessionTokens>: FromRef<S>,
{
    type Rejection = WorkhourError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_cookie(&parts.headers, SESSION_COOKIE_NAME)
            .filter(|token| !token.is_empty())
            .ok_or(WorkhourError::SessionRequired)?;

        Arc::<SessionTokens>::from_ref(state)
            .verify(&token)
            .map(CurrentUser)
            .ok_or(WorkhourError::SessionRequired)
    }
}

/// Login form, sent either urlencoded or as `multipart/form-data`
/// (browser `FormData`). A missing `pre-token` field yields an empty token.
#[derive(Debug)]
pub struct LoginForm(pub AuthForm);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(form) = Form::<AuthForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(LoginForm(form));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            if field.name() == Some(PRE_TOKEN_FIELD) {
                let pre_token = field.text().await.map_err(IntoResponse::into_response)?;
                return Ok(LoginForm(AuthForm { pre_token }));
            }
        }

        Ok(LoginForm(AuthForm::default()))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}
