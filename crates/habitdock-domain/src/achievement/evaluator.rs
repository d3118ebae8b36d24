use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::{Achievement, CriteriaType, UnlockProposal, UNLOCKED_PROGRESS};
use crate::shared::{AchievementId, UserId};
use crate::streak::{compute_streak, DailyCompletion};

/// Aggregate activity of one user, the driving input of achievement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnlockMetrics {
    /// Completed logs across all of the user's habits
    pub total_completed_logs: u64,
    /// Highest *current* streak among the user's habits
    pub max_streak_across_habits: u32,
}

impl UnlockMetrics {
    pub fn new(total_completed_logs: u64, max_streak_across_habits: u32) -> Self {
        Self {
            total_completed_logs,
            max_streak_across_habits,
        }
    }

    /// Aggregate metrics from per-habit log histories, using one `today` for every habit.
    pub fn aggregate<'a, I, L>(histories: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a [L]>,
        L: DailyCompletion + 'a,
    {
        let mut metrics = Self::default();

        for logs in histories {
            metrics.total_completed_logs +=
                logs.iter().filter(|log| log.is_completed()).count() as u64;
            let streak = compute_streak(logs, today);
            metrics.max_streak_across_habits = metrics.max_streak_across_habits.max(streak.current);
        }

        metrics
    }
}

/// Domain service deciding which achievements a user has newly earned.
/// Pure: persisting the proposals is the caller's job.
pub struct AchievementEvaluator;

impl AchievementEvaluator {
    /// Whether `achievement`'s rule holds for `metrics`.
    /// Rule types without an evaluation never unlock.
    pub fn is_satisfied(achievement: &Achievement, metrics: &UnlockMetrics) -> bool {
        let threshold = achievement.criteria_value();
        match achievement.criteria_type() {
            CriteriaType::TotalLogs => metrics.total_completed_logs as f64 >= threshold,
            CriteriaType::Streak => f64::from(metrics.max_streak_across_habits) >= threshold,
            CriteriaType::Consistency | CriteriaType::Milestone | CriteriaType::Unknown(_) => {
                false
            }
        }
    }

    /// Proposals for every catalog achievement not yet unlocked whose rule holds,
    /// in catalog order. An id is proposed at most once.
    pub fn evaluate_unlocks(
        user_id: &UserId,
        catalog: &[Achievement],
        already_unlocked: &HashSet<AchievementId>,
        metrics: &UnlockMetrics,
    ) -> Vec<UnlockProposal> {
        let mut proposed: HashSet<&AchievementId> = HashSet::new();
        let mut proposals = Vec::new();

        for achievement in catalog {
            let id = achievement.id();
            if already_unlocked.contains(id) || proposed.contains(id) {
                continue;
            }

            if Self::is_satisfied(achievement, metrics) {
                proposed.insert(id);
                proposals.push(UnlockProposal {
                    user_id: user_id.clone(),
                    achievement_id: id.clone(),
                    progress: UNLOCKED_PROGRESS,
                });
            }
        }

        debug!(
            "[achievement] evaluate user_id={} catalog={} unlocked={} total_completed_logs={} max_streak={} proposals={}",
            user_id,
            catalog.len(),
            already_unlocked.len(),
            metrics.total_completed_logs,
            metrics.max_streak_across_habits,
            proposals.len()
        );

        proposals
    }
}
