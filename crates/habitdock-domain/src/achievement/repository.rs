use async_trait::async_trait;
use std::collections::HashSet;

use super::types::{Achievement, UnlockProposal, UserAchievement};
use crate::shared::{AchievementId, DomainError, UserId};

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Insert or update a catalog entry
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError>;

    /// Insert or update several catalog entries atomically: either all are
    /// written or none are
    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), DomainError>;

    /// Full catalog, ordered by points ascending
    async fn find_all(&self) -> Result<Vec<Achievement>, DomainError>;

    /// Ids of the achievements a user has already unlocked
    async fn find_unlocked_ids(&self, user_id: &UserId)
        -> Result<HashSet<AchievementId>, DomainError>;

    /// Unlock records of a user, oldest first
    async fn find_user_achievements(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserAchievement>, DomainError>;

    /// Persist unlock proposals.
    ///
    /// Pairs already present for `(user_id, achievement_id)` are skipped, so
    /// redundant calls are harmless. Returns only the rows actually inserted.
    async fn insert_unlocks(
        &self,
        proposals: &[UnlockProposal],
    ) -> Result<Vec<UserAchievement>, DomainError>;
}
