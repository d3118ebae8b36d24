use chrono::NaiveDate;

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{HabitDto, HabitLogDto, UnlockedAchievementDto};
use habitdock_domain::habit::{HabitFrequency, HabitType};

/// Create habit command
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub name: String,
    pub habit_type: HabitType,
    pub target_value: f64,
    pub frequency: HabitFrequency,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_time: Option<String>,
}

impl Command for CreateHabitCommand {}

#[derive(Debug, Clone)]
pub struct CreateHabitResult {
    pub habit: HabitDto,
}

/// Update habit command; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateHabitCommand {
    pub habit_id: String,
    pub name: Option<String>,
    pub habit_type: Option<HabitType>,
    pub target_value: Option<f64>,
    pub frequency: Option<HabitFrequency>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub reminder_enabled: Option<bool>,
    pub reminder_time: Option<String>,
}

impl Command for UpdateHabitCommand {}

#[derive(Debug, Clone)]
pub struct UpdateHabitResult {
    pub habit: HabitDto,
}

/// Archive habit command
#[derive(Debug, Clone)]
pub struct ArchiveHabitCommand {
    pub habit_id: String,
}

impl Command for ArchiveHabitCommand {}

#[derive(Debug, Clone)]
pub struct ArchiveHabitResult {
    pub success: bool,
}

/// Delete habit command (removes its logs as well)
#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub habit_id: String,
}

impl Command for DeleteHabitCommand {}

#[derive(Debug, Clone)]
pub struct DeleteHabitResult {
    pub success: bool,
}

/// Record a value for a habit on `date` (no later than `today`)
#[derive(Debug, Clone)]
pub struct LogHabitCommand {
    pub habit_id: String,
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub value: f64,
    pub notes: Option<String>,
}

impl Command for LogHabitCommand {}

#[derive(Debug, Clone)]
pub struct LogHabitResult {
    pub log: HabitLogDto,
    pub unlocked: Vec<UnlockedAchievementDto>,
}
