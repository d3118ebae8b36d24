use serde::{Deserialize, Serialize};

use habitdock_domain::habit::Habit;
use habitdock_domain::habit_log::HabitLog;
use habitdock_domain::shared::format_log_date;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub habit_type: String,
    pub unit: String,
    pub target_value: f64,
    pub frequency: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_time: Option<String>,
    pub is_archived: bool,
    pub created_at: String, // RFC 3339
    pub updated_at: String,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id().as_str().to_string(),
            name: habit.name().to_string(),
            habit_type: habit.habit_type().as_str().to_string(),
            unit: habit.habit_type().unit_label().to_string(),
            target_value: habit.target_value(),
            frequency: habit.frequency().as_str().to_string(),
            icon: habit.icon().map(str::to_string),
            color: habit.color().map(str::to_string),
            reminder_enabled: habit.reminder().enabled,
            reminder_time: habit.reminder().time.clone(),
            is_archived: habit.is_archived(),
            created_at: habit.created_at().to_rfc3339(),
            updated_at: habit.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLogDto {
    pub id: String,
    pub habit_id: String,
    pub date: String, // YYYY-MM-DD
    pub value: f64,
    pub completed: bool,
    pub notes: Option<String>,
}

impl From<&HabitLog> for HabitLogDto {
    fn from(log: &HabitLog) -> Self {
        Self {
            id: log.id().as_str().to_string(),
            habit_id: log.habit_id().as_str().to_string(),
            date: format_log_date(log.date()),
            value: log.value(),
            completed: log.is_completed(),
            notes: log.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStatsDto {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub completion_rate: u8, // percent over the configured window
    pub total_logs: u32,
    pub last_log_date: Option<String>,
}
