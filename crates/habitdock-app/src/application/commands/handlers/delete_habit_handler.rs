use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::utils::load_owned_habit;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Delete habit command handler
pub struct DeleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl DeleteHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitCommandHandler {
    type Result = DeleteHabitResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: DeleteHabitCommand,
    ) -> Result<Self::Result, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), session, &cmd.habit_id).await?;

        self.habit_repo.delete(habit.id()).await?;

        info!(habit_id = %habit.id(), "Habit deleted");

        Ok(DeleteHabitResult { success: true })
    }
}
