use async_trait::async_trait;
use chrono::NaiveDate;

use super::entity::HabitLog;
use crate::shared::{DomainError, HabitId, UserId};

#[async_trait]
pub trait HabitLogRepository: Send + Sync {
    /// Save (upsert) a log.
    ///
    /// Conflicts on `(habit_id, date)` overwrite value, completion and notes
    /// of the existing row, keeping its id and `created_at`.
    async fn upsert(&self, log: &HabitLog) -> Result<HabitLog, DomainError>;

    /// Logs of a habit, newest date first, optionally bounded by an
    /// inclusive `[start_date, end_date]` range.
    async fn find_by_habit(
        &self,
        habit_id: &HabitId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<HabitLog>, DomainError>;

    /// The log of a habit on a specific date.
    async fn find_for_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitLog>, DomainError>;

    /// All of a user's logs on a specific date (across habits).
    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<HabitLog>, DomainError>;
}
