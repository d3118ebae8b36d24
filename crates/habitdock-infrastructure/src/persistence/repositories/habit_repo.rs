use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

use crate::persistence::{RepositoryErrorMapper, SqliteRepositoryBase};
use habitdock_domain::habit::{Habit, HabitFrequency, HabitRepository, HabitType, Reminder};
use habitdock_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    habit_type: String,
    target_value: f64,
    frequency: String,
    icon: Option<String>,
    color: Option<String>,
    reminder_enabled: bool,
    reminder_time: Option<String>,
    is_archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let habit_type = HabitType::from_str(&self.habit_type).map_err(|e| {
            DomainError::DataIntegrity(format!("Habit {}: {}", self.id, e))
        })?;
        let frequency = HabitFrequency::from_str(&self.frequency).map_err(|e| {
            DomainError::DataIntegrity(format!("Habit {}: {}", self.id, e))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            habit_type,
            self.target_value,
            frequency,
            self.icon,
            self.color,
            Reminder {
                enabled: self.reminder_enabled,
                time: self.reminder_time,
            },
            self.is_archived,
            self.created_at,
            self.updated_at,
        ))
    }
}

const SELECT_HABIT: &str = r#"
    SELECT
        id, user_id, name, habit_type, target_value, frequency, icon, color,
        reminder_enabled, reminder_time, is_archived, created_at, updated_at
    FROM habits
"#;

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habits (
                id, user_id, name, habit_type, target_value, frequency, icon, color,
                reminder_enabled, reminder_time, is_archived, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            ON CONFLICT(id) DO UPDATE SET
                name = ?3,
                habit_type = ?4,
                target_value = ?5,
                frequency = ?6,
                icon = ?7,
                color = ?8,
                reminder_enabled = ?9,
                reminder_time = ?10,
                is_archived = ?11,
                updated_at = ?13
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.user_id().as_str())
                    .bind(habit.name())
                    .bind(habit.habit_type().as_str())
                    .bind(habit.target_value())
                    .bind(habit.frequency().as_str())
                    .bind(habit.icon())
                    .bind(habit.color())
                    .bind(habit.reminder().enabled)
                    .bind(habit.reminder().time.as_deref())
                    .bind(habit.is_archived())
                    .bind(habit.created_at())
                    .bind(habit.updated_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = format!("{SELECT_HABIT} WHERE id = ?1");

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.as_str()),
                "Find habit by ID",
            )
            .await?;

        row.map(|r| r.try_into_habit()).transpose()
    }

    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query =
            format!("{SELECT_HABIT} WHERE user_id = ?1 AND is_archived = 0 ORDER BY created_at DESC");

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find active habits by user",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_habit()).collect()
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        sqlx::query("DELETE FROM habit_logs WHERE habit_id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete habit logs"))?;

        let result = sqlx::query("DELETE FROM habits WHERE id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete habit"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HabitNotFound(id.to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        Ok(())
    }
}
