//! Average Work Hour Use Case

use std::sync::Arc;

use crate::domain::repository::WorkRepository;
use crate::domain::services::average_hours_per_week;
use crate::error::WorkhourResult;

/// Average work hours per week across all users
pub struct AverageWorkHourUseCase<W>
where
    W: WorkRepository,
{
    work_repo: Arc<W>,
}

impl<W> AverageWorkHourUseCase<W>
where
    W: WorkRepository,
{
    pub fn new(work_repo: Arc<W>) -> Self {
        Self { work_repo }
    }

    pub async fn execute(&self) -> WorkhourResult<f64> {
        let entries = self.work_repo.all_work().await?;
        Ok(average_hours_per_week(&entries))
    }
}
