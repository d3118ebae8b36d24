use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitDto;
use habitdock_domain::habit::{Habit, HabitRepository, Reminder};
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Create habit command handler
pub struct CreateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl CreateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitCommandHandler {
    type Result = CreateHabitResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: CreateHabitCommand,
    ) -> Result<Self::Result, DomainError> {
        let reminder = Reminder::new(cmd.reminder_enabled, cmd.reminder_time)?;

        let mut habit = Habit::new(
            session.user_id().clone(),
            cmd.name,
            cmd.habit_type,
            cmd.target_value,
            cmd.frequency,
        )?;
        habit.set_appearance(cmd.icon, cmd.color);
        habit.set_reminder(reminder);

        self.habit_repo.save(&habit).await?;

        info!(
            user_id = %session.user_id(),
            habit_id = %habit.id(),
            habit_type = habit.habit_type().as_str(),
            "Habit created"
        );

        Ok(CreateHabitResult {
            habit: HabitDto::from(&habit),
        })
    }
}
