use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitLogDto;
use crate::application::services::AchievementUnlockService;
use crate::application::utils::{derive_log_id, load_owned_habit};
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::habit_log::{HabitLog, HabitLogRepository};
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Record a day's value, then run the achievement check for the habit owner
pub struct LogHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    log_repo: Arc<dyn HabitLogRepository>,
    unlock_service: Arc<AchievementUnlockService>,
}

impl LogHabitCommandHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        log_repo: Arc<dyn HabitLogRepository>,
        unlock_service: Arc<AchievementUnlockService>,
    ) -> Self {
        Self {
            habit_repo,
            log_repo,
            unlock_service,
        }
    }
}

#[async_trait]
impl CommandHandler<LogHabitCommand> for LogHabitCommandHandler {
    type Result = LogHabitResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: LogHabitCommand,
    ) -> Result<Self::Result, DomainError> {
        if cmd.date > cmd.today {
            return Err(DomainError::Validation(format!(
                "Cannot log a future date: {}",
                cmd.date
            )));
        }

        let habit = load_owned_habit(self.habit_repo.as_ref(), session, &cmd.habit_id).await?;

        let log = HabitLog::record(
            derive_log_id(habit.id(), cmd.date),
            &habit,
            cmd.date,
            cmd.value,
            cmd.notes,
        )?;
        let stored = self.log_repo.upsert(&log).await?;

        info!(
            habit_id = %habit.id(),
            date = %cmd.date,
            value = stored.value(),
            completed = stored.is_completed(),
            "Habit logged"
        );

        // The log is already stored; a failed check only costs this round of unlocks
        let unlocked = match self
            .unlock_service
            .check_and_unlock(habit.user_id(), cmd.today)
            .await
        {
            Ok(unlocked) => unlocked,
            Err(e) => {
                warn!(
                    user_id = %habit.user_id(),
                    error = %e.format_with_code(),
                    "[achievement] check after logging failed"
                );
                Vec::new()
            }
        };

        Ok(LogHabitResult {
            log: HabitLogDto::from(&stored),
            unlocked,
        })
    }
}
