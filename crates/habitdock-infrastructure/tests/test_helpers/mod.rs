#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;

use habitdock_domain::habit::{Habit, HabitFrequency, HabitRepository, HabitType};
use habitdock_domain::shared::UserId;
use habitdock_infrastructure::persistence::Database;

/// Fresh in-memory database with every migration applied
pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

pub async fn create_habit(
    repo: &dyn HabitRepository,
    user_id: &UserId,
    name: &str,
    target: f64,
) -> Habit {
    let habit = Habit::new(
        user_id.clone(),
        name.to_string(),
        HabitType::Water,
        target,
        HabitFrequency::Daily,
    )
    .expect("valid habit");
    repo.save(&habit).await.expect("save habit");
    habit
}
