use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::utils::load_owned_habit;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Archive habit command handler
pub struct ArchiveHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl ArchiveHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<ArchiveHabitCommand> for ArchiveHabitCommandHandler {
    type Result = ArchiveHabitResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: ArchiveHabitCommand,
    ) -> Result<Self::Result, DomainError> {
        let mut habit = load_owned_habit(self.habit_repo.as_ref(), session, &cmd.habit_id).await?;

        habit.archive()?;
        self.habit_repo.save(&habit).await?;

        info!(habit_id = %habit.id(), "Habit archived");

        Ok(ArchiveHabitResult { success: true })
    }
}
