//! Work-Hour Router

use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::{
    Router,
    extract::OriginalUri,
    routing::{get, get_service, post},
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::application::{SessionTokens, WorkhourConfig};
use crate::domain::repository::{SessionRepository, UserRepository, WorkRepository};
use crate::presentation::controllers::{AuthController, SapiController, WorkController};
use crate::presentation::middleware::{with_cors, with_session_tracking};

/// Every repository a full application needs
pub trait AppRepository:
    UserRepository + SessionRepository + WorkRepository + Clone + Send + Sync + 'static
{
}

impl<R> AppRepository for R where
    R: UserRepository + SessionRepository + WorkRepository + Clone + Send + Sync + 'static
{
}

/// Route table without middleware: static files, API routes and the SPA fallback
pub fn app_router<R: AppRepository>(repo: Arc<R>, config: &WorkhourConfig) -> Router {
    let tokens = Arc::new(SessionTokens::new(config.session_secret));

    let auth = Router::new()
        .route("/api/auth", post(AuthController::<R>::auth))
        .with_state(AuthController {
            repo: repo.clone(),
            tokens: tokens.clone(),
            cookie: Arc::new(config.session_cookie()),
        });

    let sapi = Router::new()
        .route(
            "/api/average",
            get(SapiController::<R>::average_work_hour_per_week),
        )
        .with_state(SapiController { repo: repo.clone() });

    let work = Router::new()
        .route(
            "/api/work",
            get(WorkController::<R>::get_work_data).post(WorkController::<R>::work_done),
        )
        .with_state(WorkController { repo, tokens });

    let static_files =
        ServeDir::new(&config.static_dir).fallback(spa_fallback.into_service());

    Router::new()
        .route("/", get_service(ServeFile::new(&config.index_file)))
        .nest_service("/static", static_files)
        .merge(auth)
        .merge(sapi)
        .merge(work)
        .fallback(spa_fallback)
}

/// Redirect unknown paths to the client-side router: `301 Location: /#!<path>`
pub async fn spa_fallback(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, spa_location(&uri))],
    )
}

fn spa_location(uri: &Uri) -> String {
    format!("/#!{}", uri.path())
}

/// Full application: CORS -> session tracking -> router
pub fn build_app<R: AppRepository>(repo: R, config: &WorkhourConfig) -> Router {
    let repo = Arc::new(repo);

    tracing::info!(
        static_dir = %config.static_dir.display(),
        index_file = %config.index_file.display(),
        session_policy = ?config.session_policy,
        "Building work-hour router"
    );

    let router = app_router(repo.clone(), config);
    let router = with_session_tracking(router, repo, config.session_policy);
    with_cors(router, config.allowed_origin.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spa_location_keeps_path_only() {
        let uri: Uri = "/static/missing.js?v=2".parse().unwrap();
        assert_eq!(spa_location(&uri), "/#!/static/missing.js");
    }
}
