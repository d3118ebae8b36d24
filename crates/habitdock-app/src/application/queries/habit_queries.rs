use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::application::dtos::{HabitDto, HabitLogDto, HabitStatsDto};
use crate::application::utils::load_owned_habit;
use habitdock_domain::habit::{Habit, HabitRepository};
use habitdock_domain::habit_log::HabitLogRepository;
use habitdock_domain::session::Session;
use habitdock_domain::shared::{format_log_date, DomainError};
use habitdock_domain::streak::{compute_completion_rate, compute_streak};

pub struct HabitQueryService {
    habit_repo: Arc<dyn HabitRepository>,
    log_repo: Arc<dyn HabitLogRepository>,
    completion_window_days: u32,
}

impl HabitQueryService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        log_repo: Arc<dyn HabitLogRepository>,
        completion_window_days: u32,
    ) -> Self {
        Self {
            habit_repo,
            log_repo,
            completion_window_days,
        }
    }

    /// Active habits of the session user, newest first
    pub async fn list_habits(&self, session: &Session) -> Result<Vec<HabitDto>, DomainError> {
        let habits = self.habit_repo.find_active_by_user(session.user_id()).await?;
        Ok(habits.iter().map(HabitDto::from).collect())
    }

    pub async fn get_habit(&self, session: &Session, habit_id: &str) -> Result<HabitDto, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), session, habit_id).await?;
        Ok(HabitDto::from(&habit))
    }

    /// Logs of one habit within an optional inclusive range, newest first
    pub async fn get_habit_logs(
        &self,
        session: &Session,
        habit_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<HabitLogDto>, DomainError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(DomainError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        let habit = load_owned_habit(self.habit_repo.as_ref(), session, habit_id).await?;
        let logs = self
            .log_repo
            .find_by_habit(habit.id(), start_date, end_date)
            .await?;

        Ok(logs.iter().map(HabitLogDto::from).collect())
    }

    /// The habit's log for one day, if any
    pub async fn get_log_for_date(
        &self,
        session: &Session,
        habit_id: &str,
        date: NaiveDate,
    ) -> Result<Option<HabitLogDto>, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), session, habit_id).await?;
        let log = self.log_repo.find_for_date(habit.id(), date).await?;
        Ok(log.as_ref().map(HabitLogDto::from))
    }

    pub async fn get_habit_stats(
        &self,
        session: &Session,
        habit_id: &str,
        today: NaiveDate,
    ) -> Result<HabitStatsDto, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), session, habit_id).await?;
        self.stats_for(&habit, today).await
    }

    /// Stats for every active habit of the session user
    pub async fn get_all_habit_stats(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<Vec<HabitStatsDto>, DomainError> {
        let habits = self.habit_repo.find_active_by_user(session.user_id()).await?;

        let mut results = Vec::with_capacity(habits.len());
        for habit in &habits {
            results.push(self.stats_for(habit, today).await?);
        }

        debug!(
            user_id = %session.user_id(),
            habits = results.len(),
            "[streak] get_all_habit_stats"
        );
        Ok(results)
    }

    async fn stats_for(&self, habit: &Habit, today: NaiveDate) -> Result<HabitStatsDto, DomainError> {
        let logs = self.log_repo.find_by_habit(habit.id(), None, None).await?;

        let streak = compute_streak(&logs, today);
        let completion_rate = compute_completion_rate(&logs, today, self.completion_window_days);

        Ok(HabitStatsDto {
            habit_id: habit.id().as_str().to_string(),
            habit_name: habit.name().to_string(),
            current_streak: streak.current,
            best_streak: streak.best,
            completion_rate,
            total_logs: u32::try_from(logs.len()).unwrap_or(u32::MAX),
            last_log_date: logs.iter().map(|l| l.date()).max().map(format_log_date),
        })
    }
}
