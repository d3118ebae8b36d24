use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::application::dtos::UnlockedAchievementDto;
use habitdock_domain::achievement::{
    AchievementEvaluator, AchievementRepository, UnlockMetrics,
};
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::habit_log::HabitLogRepository;
use habitdock_domain::shared::{DomainError, UserId};

/// Loads a user's activity, runs the evaluator and persists new unlocks.
pub struct AchievementUnlockService {
    habit_repo: Arc<dyn HabitRepository>,
    log_repo: Arc<dyn HabitLogRepository>,
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl AchievementUnlockService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        log_repo: Arc<dyn HabitLogRepository>,
        achievement_repo: Arc<dyn AchievementRepository>,
    ) -> Self {
        Self {
            habit_repo,
            log_repo,
            achievement_repo,
        }
    }

    /// Activity metrics of `user_id` over their active habits
    pub async fn collect_metrics(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<UnlockMetrics, DomainError> {
        let habits = self.habit_repo.find_active_by_user(user_id).await?;

        let mut histories = Vec::with_capacity(habits.len());
        for habit in &habits {
            histories.push(self.log_repo.find_by_habit(habit.id(), None, None).await?);
        }

        Ok(UnlockMetrics::aggregate(
            histories.iter().map(Vec::as_slice),
            today,
        ))
    }

    /// Unlock every achievement whose rule now holds for `user_id`.
    /// Returns only the unlocks persisted by this call.
    pub async fn check_and_unlock(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<Vec<UnlockedAchievementDto>, DomainError> {
        let catalog = self.achievement_repo.find_all().await?;
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let already_unlocked = self.achievement_repo.find_unlocked_ids(user_id).await?;
        let metrics = self.collect_metrics(user_id, today).await?;

        let proposals =
            AchievementEvaluator::evaluate_unlocks(user_id, &catalog, &already_unlocked, &metrics);
        if proposals.is_empty() {
            return Ok(Vec::new());
        }

        let inserted = self.achievement_repo.insert_unlocks(&proposals).await?;

        let by_id: HashMap<_, _> = catalog.iter().map(|a| (a.id(), a)).collect();
        let unlocked: Vec<UnlockedAchievementDto> = inserted
            .iter()
            .filter_map(|record| {
                by_id
                    .get(&record.achievement_id)
                    .map(|achievement| UnlockedAchievementDto {
                        achievement_id: record.achievement_id.as_str().to_string(),
                        name: achievement.name().to_string(),
                        points: achievement.points(),
                        progress: record.progress.unwrap_or_default(),
                    })
            })
            .collect();

        info!(
            user_id = %user_id,
            total_completed_logs = metrics.total_completed_logs,
            max_streak = metrics.max_streak_across_habits,
            unlocked = unlocked.len(),
            "[achievement] check_and_unlock finished"
        );

        Ok(unlocked)
    }
}
