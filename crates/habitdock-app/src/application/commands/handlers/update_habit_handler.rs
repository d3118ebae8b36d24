use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::utils::load_owned_habit;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitDto;
use habitdock_domain::habit::{HabitRepository, Reminder};
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Update habit command handler
pub struct UpdateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl UpdateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateHabitCommand> for UpdateHabitCommandHandler {
    type Result = UpdateHabitResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: UpdateHabitCommand,
    ) -> Result<Self::Result, DomainError> {
        let mut habit = load_owned_habit(self.habit_repo.as_ref(), session, &cmd.habit_id).await?;
        habit.ensure_active()?;

        if let Some(name) = cmd.name {
            habit.rename(name)?;
        }
        if let Some(habit_type) = cmd.habit_type {
            habit.set_type(habit_type);
        }
        if let Some(target) = cmd.target_value {
            habit.set_target(target)?;
        }
        if let Some(frequency) = cmd.frequency {
            habit.set_frequency(frequency);
        }
        if cmd.icon.is_some() || cmd.color.is_some() {
            let icon = cmd.icon.or_else(|| habit.icon().map(str::to_string));
            let color = cmd.color.or_else(|| habit.color().map(str::to_string));
            habit.set_appearance(icon, color);
        }
        if cmd.reminder_enabled.is_some() || cmd.reminder_time.is_some() {
            let current = habit.reminder().clone();
            let reminder = Reminder::new(
                cmd.reminder_enabled.unwrap_or(current.enabled),
                cmd.reminder_time.or(current.time),
            )?;
            habit.set_reminder(reminder);
        }

        self.habit_repo.save(&habit).await?;

        info!(habit_id = %habit.id(), "Habit updated");

        Ok(UpdateHabitResult {
            habit: HabitDto::from(&habit),
        })
    }
}
