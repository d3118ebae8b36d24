use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitdock_domain::habit_log::{HabitLog, HabitLogRepository};
use habitdock_domain::shared::{
    format_log_date, parse_log_date, DomainError, HabitId, LogId, UserId,
};

#[derive(FromRow)]
struct HabitLogRow {
    id: String,
    habit_id: String,
    user_id: String,
    date: String,
    value: f64,
    completed: bool,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitLogRow {
    fn try_into_log(self) -> Result<HabitLog, DomainError> {
        let date = parse_log_date(&self.date).map_err(|e| {
            DomainError::DataIntegrity(format!("Habit log {}: {}", self.id, e))
        })?;

        Ok(HabitLog::restore(
            LogId::from_string(&self.id),
            HabitId::from_string(&self.habit_id),
            UserId::from_string(&self.user_id),
            date,
            self.value,
            self.completed,
            self.notes,
            self.created_at,
            self.updated_at,
        ))
    }
}

const LOG_COLUMNS: &str =
    "id, habit_id, user_id, date, value, completed, notes, created_at, updated_at";

pub struct SqliteHabitLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitLogRepository for SqliteHabitLogRepository {
    async fn upsert(&self, log: &HabitLog) -> Result<HabitLog, DomainError> {
        let query = format!(
            r#"
            INSERT INTO habit_logs ({LOG_COLUMNS})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(habit_id, date) DO UPDATE SET
                value = excluded.value,
                completed = excluded.completed,
                notes = excluded.notes,
                updated_at = excluded.updated_at
            RETURNING {LOG_COLUMNS}
            "#
        );

        let row: HabitLogRow = self
            .base
            .fetch_one(
                sqlx::query_as(&query)
                    .bind(log.id().as_str())
                    .bind(log.habit_id().as_str())
                    .bind(log.user_id().as_str())
                    .bind(format_log_date(log.date()))
                    .bind(log.value())
                    .bind(log.is_completed())
                    .bind(log.notes())
                    .bind(log.created_at())
                    .bind(log.updated_at()),
                "Upsert habit log",
            )
            .await?;

        row.try_into_log()
    }

    async fn find_by_habit(
        &self,
        habit_id: &HabitId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<HabitLog>, DomainError> {
        let query = format!(
            r#"
            SELECT {LOG_COLUMNS}
            FROM habit_logs
            WHERE habit_id = ?1
              AND (?2 IS NULL OR date >= ?2)
              AND (?3 IS NULL OR date <= ?3)
            ORDER BY date DESC
            "#
        );

        let rows: Vec<HabitLogRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(habit_id.as_str())
                    .bind(start_date.map(format_log_date))
                    .bind(end_date.map(format_log_date)),
                "Find habit logs",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_log()).collect()
    }

    async fn find_for_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitLog>, DomainError> {
        let query =
            format!("SELECT {LOG_COLUMNS} FROM habit_logs WHERE habit_id = ?1 AND date = ?2");

        let row: Option<HabitLogRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(habit_id.as_str())
                    .bind(format_log_date(date)),
                "Find habit log for date",
            )
            .await?;

        row.map(|r| r.try_into_log()).transpose()
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<HabitLog>, DomainError> {
        let query = format!(
            "SELECT {LOG_COLUMNS} FROM habit_logs WHERE user_id = ?1 AND date = ?2 ORDER BY habit_id"
        );

        let rows: Vec<HabitLogRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(format_log_date(date)),
                "Find user logs for date",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_log()).collect()
    }
}
