use chrono::NaiveDate;
use serde_json::{json, Value};
use std::path::Path;

use super::cli::{Commands, ConfigCommands, HabitCommands};
use super::state::AppState;
use crate::application::commands::*;
use crate::application::dtos::AchievementDefinitionDto;
use crate::application::services::ConfigService;
use habitdock_domain::session::Session;
use habitdock_domain::shared::{parse_log_date, DomainError};
use habitdock_infrastructure::logging::get_log_dir;

/// Run one CLI command against the wired application and return its JSON output
pub async fn execute(
    state: &AppState,
    session: &Session,
    command: Commands,
    today: NaiveDate,
) -> Result<Value, DomainError> {
    match command {
        Commands::Habit { command } => execute_habit(state, session, command).await,
        Commands::Log {
            habit,
            value,
            notes,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_log_date(&raw)?,
                None => today,
            };
            let result = state
                .command_handlers
                .log_habit
                .handle(
                    session,
                    LogHabitCommand {
                        habit_id: habit,
                        date,
                        today,
                        value,
                        notes,
                    },
                )
                .await?;
            Ok(json!({ "log": result.log, "unlocked": result.unlocked }))
        }
        Commands::Logs {
            habit,
            on: Some(day),
            ..
        } => {
            let day = parse_log_date(&day)?;
            let log = state
                .queries
                .habits
                .get_log_for_date(session, &habit, day)
                .await?;
            to_json(&log)
        }
        Commands::Logs { habit, from, to, .. } => {
            let from = from.as_deref().map(parse_log_date).transpose()?;
            let to = to.as_deref().map(parse_log_date).transpose()?;
            let logs = state
                .queries
                .habits
                .get_habit_logs(session, &habit, from, to)
                .await?;
            to_json(&logs)
        }
        Commands::Stats { habit } => match habit {
            Some(id) => {
                let stats = state
                    .queries
                    .habits
                    .get_habit_stats(session, &id, today)
                    .await?;
                to_json(&stats)
            }
            None => {
                let stats = state
                    .queries
                    .habits
                    .get_all_habit_stats(session, today)
                    .await?;
                to_json(&stats)
            }
        },
        Commands::Dashboard => {
            let dashboard = state.queries.dashboard.get_dashboard(session, today).await?;
            to_json(&dashboard)
        }
        Commands::Achievements => {
            let board = state.queries.achievements.get_board(session).await?;
            to_json(&board)
        }
        Commands::CheckAchievements => {
            let result = state
                .command_handlers
                .check_achievements
                .handle(session, CheckAchievementsCommand { today })
                .await?;
            Ok(json!({ "unlocked": result.unlocked }))
        }
        Commands::ImportAchievements { file } => {
            let definitions = read_definitions(&file)?;
            let result = state
                .command_handlers
                .import_achievements
                .handle(session, ImportAchievementsCommand { definitions })
                .await?;
            Ok(json!({ "imported": result.imported }))
        }
        Commands::Config { command } => run_config_command(&state.services.config, command),
    }
}

async fn execute_habit(
    state: &AppState,
    session: &Session,
    command: HabitCommands,
) -> Result<Value, DomainError> {
    let handlers = &state.command_handlers;

    match command {
        HabitCommands::Add {
            name,
            habit_type,
            target,
            frequency,
            icon,
            color,
            reminder,
        } => {
            let result = handlers
                .create_habit
                .handle(
                    session,
                    CreateHabitCommand {
                        name,
                        habit_type,
                        target_value: target,
                        frequency,
                        icon,
                        color,
                        reminder_enabled: reminder.is_some(),
                        reminder_time: reminder,
                    },
                )
                .await?;
            to_json(&result.habit)
        }
        HabitCommands::List => {
            let habits = state.queries.habits.list_habits(session).await?;
            to_json(&habits)
        }
        HabitCommands::Show { id } => {
            let habit = state.queries.habits.get_habit(session, &id).await?;
            to_json(&habit)
        }
        HabitCommands::Update {
            id,
            name,
            habit_type,
            target,
            frequency,
            icon,
            color,
            reminder,
            no_reminder,
        } => {
            let reminder_enabled = if no_reminder {
                Some(false)
            } else {
                reminder.as_ref().map(|_| true)
            };
            let result = handlers
                .update_habit
                .handle(
                    session,
                    UpdateHabitCommand {
                        habit_id: id,
                        name,
                        habit_type,
                        target_value: target,
                        frequency,
                        icon,
                        color,
                        reminder_enabled,
                        reminder_time: reminder,
                    },
                )
                .await?;
            to_json(&result.habit)
        }
        HabitCommands::Archive { id } => {
            let result = handlers
                .archive_habit
                .handle(session, ArchiveHabitCommand { habit_id: id })
                .await?;
            Ok(json!({ "success": result.success }))
        }
        HabitCommands::Delete { id } => {
            let result = handlers
                .delete_habit
                .handle(session, DeleteHabitCommand { habit_id: id })
                .await?;
            Ok(json!({ "success": result.success }))
        }
    }
}

/// Config commands never need the database
pub fn run_config_command(
    config: &ConfigService,
    command: ConfigCommands,
) -> Result<Value, DomainError> {
    match command {
        ConfigCommands::Show => Ok(json!({
            "config_path": config.config_path().display().to_string(),
            "database_path": config.database_path().display().to_string(),
            "log_dir": config.log_dir().display().to_string(),
            "active_log_dir": get_log_dir().map(|dir| dir.display().to_string()),
            "log_level": config.get_log_level().as_str(),
            "completion_window_days": config.completion_window_days(),
        })),
        ConfigCommands::SetLogLevel { level } => {
            config
                .set_log_level(level)
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
            Ok(json!({ "log_level": level.as_str() }))
        }
    }
}

fn read_definitions(path: &Path) -> Result<Vec<AchievementDefinitionDto>, DomainError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| DomainError::Serialization(format!("{}: {}", path.display(), e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, DomainError> {
    serde_json::to_value(value).map_err(|e| DomainError::Serialization(e.to_string()))
}
