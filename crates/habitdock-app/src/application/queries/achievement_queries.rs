use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dtos::{AchievementBoardDto, AchievementDto};
use habitdock_domain::achievement::AchievementRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

pub struct AchievementQueries {
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl AchievementQueries {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self { achievement_repo }
    }

    /// Full catalog by points ascending, each entry flagged for the session user
    pub async fn get_board(&self, session: &Session) -> Result<AchievementBoardDto, DomainError> {
        let catalog = self.achievement_repo.find_all().await?;
        let records = self
            .achievement_repo
            .find_user_achievements(session.user_id())
            .await?;
        let unlocks: HashMap<_, _> = records.iter().map(|r| (&r.achievement_id, r)).collect();

        let achievements: Vec<AchievementDto> = catalog
            .iter()
            .map(|a| AchievementDto::from_catalog(a, unlocks.get(a.id()).copied()))
            .collect();

        let unlocked_count = achievements.iter().filter(|a| a.unlocked).count() as u32;
        let total_points = achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.points)
            .sum();

        Ok(AchievementBoardDto {
            total_count: achievements.len() as u32,
            unlocked_count,
            total_points,
            achievements,
        })
    }
}
