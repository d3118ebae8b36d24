use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::achievement_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::services::AchievementUnlockService;
use habitdock_domain::achievement::AchievementRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Check-and-unlock for the session's user
pub struct CheckAchievementsCommandHandler {
    unlock_service: Arc<AchievementUnlockService>,
}

impl CheckAchievementsCommandHandler {
    pub fn new(unlock_service: Arc<AchievementUnlockService>) -> Self {
        Self { unlock_service }
    }
}

#[async_trait]
impl CommandHandler<CheckAchievementsCommand> for CheckAchievementsCommandHandler {
    type Result = CheckAchievementsResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: CheckAchievementsCommand,
    ) -> Result<Self::Result, DomainError> {
        let unlocked = self
            .unlock_service
            .check_and_unlock(session.user_id(), cmd.today)
            .await?;

        Ok(CheckAchievementsResult { unlocked })
    }
}

/// Import catalog entries; every definition is validated before any is saved
pub struct ImportAchievementsCommandHandler {
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl ImportAchievementsCommandHandler {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self { achievement_repo }
    }
}

#[async_trait]
impl CommandHandler<ImportAchievementsCommand> for ImportAchievementsCommandHandler {
    type Result = ImportAchievementsResult;

    async fn handle(
        &self,
        session: &Session,
        cmd: ImportAchievementsCommand,
    ) -> Result<Self::Result, DomainError> {
        if !session.is_admin() {
            return Err(DomainError::Unauthorized(
                "Only admins can modify the achievement catalog".to_string(),
            ));
        }

        let achievements = cmd
            .definitions
            .into_iter()
            .map(|definition| definition.into_achievement())
            .collect::<Result<Vec<_>, _>>()?;

        self.achievement_repo.save_all(&achievements).await?;

        info!(imported = achievements.len(), "[achievement] Catalog imported");

        Ok(ImportAchievementsResult {
            imported: achievements.len(),
        })
    }
}
