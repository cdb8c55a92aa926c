//! Record Work Use Case

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::WorkEntry;
use crate::domain::repository::WorkRepository;
use crate::domain::value_objects::WorkHours;
use crate::error::{WorkhourError, WorkhourResult};

/// Record work input
#[derive(Debug)]
pub struct RecordWorkInput {
    pub date: NaiveDate,
    pub hours: f64,
    pub note: Option<String>,
}

/// Record work use case
pub struct RecordWorkUseCase<W>
where
    W: WorkRepository,
{
    work_repo: Arc<W>,
}

impl<W> RecordWorkUseCase<W>
where
    W: WorkRepository,
{
    pub fn new(work_repo: Arc<W>) -> Self {
        Self { work_repo }
    }

    pub async fn execute(&self, user_id: &str, input: RecordWorkInput) -> WorkhourResult<WorkEntry> {
        let hours = WorkHours::new(input.hours).ok_or_else(|| {
            WorkhourError::InvalidWorkEntry(format!(
                "hours must be greater than 0 and at most {}",
                WorkHours::MAX
            ))
        })?;

        let note = input
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        let entry = WorkEntry::new(user_id.to_string(), input.date, hours, note);
        self.work_repo.record_work(&entry).await?;

        tracing::info!(user_id = %user_id, date = %entry.date, hours = entry.hours, "Work recorded");

        Ok(entry)
    }
}
