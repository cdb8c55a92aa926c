//! Query Work Use Case

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::WorkEntry;
use crate::domain::repository::WorkRepository;
use crate::domain::value_objects::DateRange;
use crate::error::{WorkhourError, WorkhourResult};

/// Query work use case
pub struct QueryWorkUseCase<W>
where
    W: WorkRepository,
{
    work_repo: Arc<W>,
}

impl<W> QueryWorkUseCase<W>
where
    W: WorkRepository,
{
    pub fn new(work_repo: Arc<W>) -> Self {
        Self { work_repo }
    }

    /// Entries of `user_id` between `from` and `to` (inclusive), oldest first
    pub async fn execute(
        &self,
        user_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> WorkhourResult<Vec<WorkEntry>> {
        let range = DateRange::new(from, to)
            .ok_or_else(|| WorkhourError::InvalidRange("from is after to".to_string()))?;

        self.work_repo.query_work(user_id, &range).await
    }
}
