use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::shared::{DomainError, HabitId, LogId, UserId};
use crate::streak::DailyCompletion;

/// One day's recorded activity for one habit.
///
/// At most one log exists per `(habit_id, date)`; the persistence layer
/// enforces it with an upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    id: LogId,
    habit_id: HabitId,
    user_id: UserId,
    date: NaiveDate,
    value: f64,
    completed: bool,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitLog {
    /// Record a value for `habit` on `date`; completion is derived from the habit target.
    pub fn record(
        id: LogId,
        habit: &Habit,
        date: NaiveDate,
        value: f64,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        habit.ensure_active()?;

        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::Validation(
                "Logged value must be a non-negative number".to_string(),
            ));
        }

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let now = Utc::now();
        Ok(Self {
            id,
            habit_id: habit.id().clone(),
            user_id: habit.user_id().clone(),
            date,
            value,
            completed: habit.is_met_by(value),
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: LogId,
        habit_id: HabitId,
        user_id: UserId,
        date: NaiveDate,
        value: f64,
        completed: bool,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            user_id,
            date,
            value,
            completed,
            notes,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &LogId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl DailyCompletion for HabitLog {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{HabitFrequency, HabitType};

    fn habit(target: f64) -> Habit {
        Habit::new(
            UserId::from_string("user-1"),
            "Walk".to_string(),
            HabitType::Exercise,
            target,
            HabitFrequency::Daily,
        )
        .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_marks_completed_when_target_met() {
        let habit = habit(30.0);
        let log = HabitLog::record(LogId::new(), &habit, date("2024-05-01"), 30.0, None).unwrap();

        assert!(log.is_completed());
        assert_eq!(log.habit_id(), habit.id());
        assert_eq!(log.user_id(), habit.user_id());
    }

    #[test]
    fn test_record_below_target_is_not_completed() {
        let habit = habit(30.0);
        let log = HabitLog::record(LogId::new(), &habit, date("2024-05-01"), 12.0, None).unwrap();

        assert!(!log.is_completed());
        assert_eq!(log.value(), 12.0);
    }

    #[test]
    fn test_record_drops_blank_notes() {
        let habit = habit(1.0);
        let log = HabitLog::record(
            LogId::new(),
            &habit,
            date("2024-05-01"),
            1.0,
            Some("   ".to_string()),
        )
        .unwrap();

        assert!(log.notes().is_none());
    }

    #[test]
    fn test_record_rejects_negative_value() {
        let habit = habit(1.0);
        let result = HabitLog::record(LogId::new(), &habit, date("2024-05-01"), -2.0, None);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_record_on_archived_habit_fails() {
        let mut habit = habit(1.0);
        habit.archive().unwrap();

        let result = HabitLog::record(LogId::new(), &habit, date("2024-05-01"), 1.0, None);
        assert!(matches!(result, Err(DomainError::HabitArchived(_))));
    }
}
