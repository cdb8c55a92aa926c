//! Middleware Chain
//!
//! Each middleware is a `Router -> Router` function. Startup composes them as
//! `with_cors(with_session_tracking(router, ..), ..)`, so CORS runs first and
//! wraps everything the session step and the router answer.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::{SessionPolicy, TrackSessionUseCase};
use crate::domain::repository::SessionRepository;

/// Session middleware state
pub struct SessionTrackingState<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub policy: SessionPolicy,
}

impl<R> Clone for SessionTrackingState<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            policy: self.policy,
        }
    }
}

/// Upsert the request cookies under their `SESSIONID`, then run the router
pub async fn track_session<R>(
    State(state): State<SessionTrackingState<R>>,
    req: Request,
    next: Next,
) -> Response
where
    R: SessionRepository + Send + Sync + 'static,
{
    let use_case = TrackSessionUseCase::new(state.repo.clone(), state.policy);

    if let Err(e) = use_case.execute(req.headers()).await {
        return e.into_response();
    }

    next.run(req).await
}

pub fn with_session_tracking<R>(router: Router, repo: Arc<R>, policy: SessionPolicy) -> Router
where
    R: SessionRepository + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        SessionTrackingState { repo, policy },
        track_session::<R>,
    ))
}

/// CORS middleware state
#[derive(Clone)]
pub struct CorsState {
    pub allowed_origin: HeaderValue,
}

/// Run the inner handler, then stamp the CORS headers on whatever it returned
pub async fn cors_headers(State(state): State<CorsState>, req: Request, next: Next) -> Response {
    tracing::debug!(method = %req.method(), path = %req.uri().path(), "Request received");

    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.allowed_origin.clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    response
}

pub fn with_cors(router: Router, allowed_origin: HeaderValue) -> Router {
    router.layer(middleware::from_fn_with_state(
        CorsState { allowed_origin },
        cors_headers,
    ))
}
