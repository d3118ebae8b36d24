use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::application::dtos::DashboardStatsDto;
use habitdock_domain::achievement::AchievementRepository;
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::habit_log::HabitLogRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::{format_log_date, DomainError};

pub struct DashboardQueries {
    habit_repo: Arc<dyn HabitRepository>,
    log_repo: Arc<dyn HabitLogRepository>,
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl DashboardQueries {
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

    /// Today's progress over the session user's active habits
    pub async fn get_dashboard(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<DashboardStatsDto, DomainError> {
        let user_id = session.user_id();
        let habits = self.habit_repo.find_active_by_user(user_id).await?;
        let todays_logs = self.log_repo.find_by_user_on_date(user_id, today).await?;
        let unlocked = self.achievement_repo.find_unlocked_ids(user_id).await?;

        // Logs of archived habits do not count towards today's progress
        let active_ids: HashSet<_> = habits.iter().map(|h| h.id()).collect();
        let today_completed = todays_logs
            .iter()
            .filter(|log| log.is_completed() && active_ids.contains(log.habit_id()))
            .count() as u32;
        let today_total = habits.len() as u32;
        let today_percent = percent(today_completed, today_total);

        let dto = DashboardStatsDto {
            date: format_log_date(today),
            total_habits: today_total,
            active_habits: today_total,
            today_completed,
            today_total,
            current_week_completion: today_percent,
            total_achievements: unlocked.len() as u32,
            wellness_score: today_percent,
        };

        info!(
            user_id = %user_id,
            today_completed = dto.today_completed,
            today_total = dto.today_total,
            "Dashboard computed"
        );

        Ok(dto)
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0
fn percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    ((200 * part + whole) / (2 * whole)).min(100) as u8
}
