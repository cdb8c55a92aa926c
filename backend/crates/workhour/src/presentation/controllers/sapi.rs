//! SAPI Controller
//!
//! Aggregate statistics; no session required.

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::AverageWorkHourUseCase;
use crate::domain::repository::WorkRepository;
use crate::error::WorkhourResult;

#[derive(Clone)]
pub struct SapiController<R>
where
    R: WorkRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> SapiController<R>
where
    R: WorkRepository + Clone + Send + Sync + 'static,
{
    /// GET /api/average
    ///
    /// Body is a bare JSON number.
    pub async fn average_work_hour_per_week(
        State(controller): State<Self>,
    ) -> WorkhourResult<Json<f64>> {
        let average = AverageWorkHourUseCase::new(controller.repo.clone())
            .execute()
            .await?;

        Ok(Json(average))
    }
}
