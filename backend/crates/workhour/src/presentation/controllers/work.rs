//! Work Controller

use axum::Json;
use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{QueryWorkUseCase, RecordWorkInput, RecordWorkUseCase, SessionTokens};
use crate::domain::entities::WorkEntry;
use crate::domain::repository::WorkRepository;
use crate::error::WorkhourResult;
use crate::presentation::dto::{WorkDoneRequest, WorkQuery};
use crate::presentation::extract::CurrentUser;

#[derive(Clone)]
pub struct WorkController<R>
where
    R: WorkRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<SessionTokens>,
}

impl<R> FromRef<WorkController<R>> for Arc<SessionTokens>
where
    R: WorkRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(controller: &WorkController<R>) -> Self {
        controller.tokens.clone()
    }
}

impl<R> WorkController<R>
where
    R: WorkRepository + Clone + Send + Sync + 'static,
{
    /// POST /api/work
    pub async fn work_done(
        State(controller): State<Self>,
        CurrentUser(user_id): CurrentUser,
        Json(req): Json<WorkDoneRequest>,
    ) -> WorkhourResult<(StatusCode, Json<WorkEntry>)> {
        let use_case = RecordWorkUseCase::new(controller.repo.clone());

        let input = RecordWorkInput {
            date: req.date,
            hours: req.hours,
            note: req.note,
        };

        let entry = use_case.execute(&user_id, input).await?;

        Ok((StatusCode::CREATED, Json(entry)))
    }

    /// GET /api/work?from=&to=
    pub async fn get_work_data(
        State(controller): State<Self>,
        CurrentUser(user_id): CurrentUser,
        Query(query): Query<WorkQuery>,
    ) -> WorkhourResult<Json<Vec<WorkEntry>>> {
        let entries = QueryWorkUseCase::new(controller.repo.clone())
            .execute(&user_id, query.from, query.to)
            .await?;

        Ok(Json(entries))
    }
}
