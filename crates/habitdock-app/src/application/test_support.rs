//! In-memory repositories and fixtures shared by the application tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::services::AchievementUnlockService;
use habitdock_domain::achievement::{
    Achievement, AchievementCategory, AchievementRepository, CriteriaType, UnlockProposal,
    UserAchievement,
};
use habitdock_domain::habit::{Habit, HabitFrequency, HabitRepository, HabitType};
use habitdock_domain::habit_log::{HabitLog, HabitLogRepository};
use habitdock_domain::session::{Session, UserRole};
use habitdock_domain::shared::{AchievementId, DomainError, HabitId, UserId};

/// Deleting a habit also drops its logs from the paired log repository
pub struct InMemoryHabitRepository {
    habits: RwLock<HashMap<String, Habit>>,
    logs: Arc<InMemoryHabitLogRepository>,
}

impl InMemoryHabitRepository {
    pub fn new(logs: Arc<InMemoryHabitLogRepository>) -> Self {
        Self {
            habits: RwLock::new(HashMap::new()),
            logs,
        }
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut active: Vec<Habit> = habits
            .values()
            .filter(|h| h.user_id() == user_id && !h.is_archived())
            .cloned()
            .collect();
        active.sort_by_key(|h| std::cmp::Reverse(h.created_at()));
        Ok(active)
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let removed = self.habits.write().await.remove(id.as_str());
        if removed.is_none() {
            return Err(DomainError::HabitNotFound(id.to_string()));
        }
        self.logs
            .logs
            .write()
            .await
            .retain(|(habit_id, _), _| habit_id != id.as_str());
        Ok(())
    }
}

pub struct InMemoryHabitLogRepository {
    logs: RwLock<HashMap<(String, NaiveDate), HabitLog>>,
}

impl InMemoryHabitLogRepository {
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.logs.read().await.len()
    }
}

#[async_trait]
impl HabitLogRepository for InMemoryHabitLogRepository {
    async fn upsert(&self, log: &HabitLog) -> Result<HabitLog, DomainError> {
        let mut logs = self.logs.write().await;
        let key = (log.habit_id().as_str().to_string(), log.date());

        let stored = match logs.get(&key) {
            Some(existing) => HabitLog::restore(
                existing.id().clone(),
                existing.habit_id().clone(),
                existing.user_id().clone(),
                existing.date(),
                log.value(),
                log.is_completed(),
                log.notes().map(str::to_string),
                existing.created_at(),
                log.updated_at(),
            ),
            None => log.clone(),
        };

        logs.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_habit(
        &self,
        habit_id: &HabitId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<HabitLog>, DomainError> {
        let logs = self.logs.read().await;
        let mut found: Vec<HabitLog> = logs
            .values()
            .filter(|l| l.habit_id() == habit_id)
            .filter(|l| start_date.map_or(true, |s| l.date() >= s))
            .filter(|l| end_date.map_or(true, |e| l.date() <= e))
            .cloned()
            .collect();
        found.sort_by_key(|l| std::cmp::Reverse(l.date()));
        Ok(found)
    }

    async fn find_for_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitLog>, DomainError> {
        let logs = self.logs.read().await;
        Ok(logs.get(&(habit_id.as_str().to_string(), date)).cloned())
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<HabitLog>, DomainError> {
        let logs = self.logs.read().await;
        Ok(logs
            .values()
            .filter(|l| l.user_id() == user_id && l.date() == date)
            .cloned()
            .collect())
    }
}

pub struct InMemoryAchievementRepository {
    catalog: RwLock<HashMap<String, Achievement>>,
    unlocks: RwLock<Vec<UserAchievement>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(HashMap::new()),
            unlocks: RwLock::new(Vec::new()),
        }
    }

    pub async fn with_catalog(achievements: Vec<Achievement>) -> Self {
        let repo = Self::new();
        for achievement in &achievements {
            repo.save(achievement).await.unwrap();
        }
        repo
    }

    pub async fn unlock_count(&self) -> usize {
        self.unlocks.read().await.len()
    }
}

#[async_trait]
impl AchievementRepository for InMemoryAchievementRepository {
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError> {
        let mut catalog = self.catalog.write().await;
        catalog.insert(achievement.id().as_str().to_string(), achievement.clone());
        Ok(())
    }

    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), DomainError> {
        let mut catalog = self.catalog.write().await;
        for achievement in achievements {
            catalog.insert(achievement.id().as_str().to_string(), achievement.clone());
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Achievement>, DomainError> {
        let catalog = self.catalog.read().await;
        let mut all: Vec<Achievement> = catalog.values().cloned().collect();
        all.sort_by(|a, b| {
            a.points()
                .cmp(&b.points())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(all)
    }

    async fn find_unlocked_ids(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<AchievementId>, DomainError> {
        let unlocks = self.unlocks.read().await;
        Ok(unlocks
            .iter()
            .filter(|u| &u.user_id == user_id)
            .map(|u| u.achievement_id.clone())
            .collect())
    }

    async fn find_user_achievements(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserAchievement>, DomainError> {
        let unlocks = self.unlocks.read().await;
        Ok(unlocks
            .iter()
            .filter(|u| &u.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_unlocks(
        &self,
        proposals: &[UnlockProposal],
    ) -> Result<Vec<UserAchievement>, DomainError> {
        let mut unlocks = self.unlocks.write().await;
        let mut inserted = Vec::new();

        for proposal in proposals {
            let exists = unlocks.iter().any(|u| {
                u.user_id == proposal.user_id && u.achievement_id == proposal.achievement_id
            });
            if exists {
                continue;
            }
            let record = UserAchievement {
                id: format!("ua-{}", unlocks.len() + 1),
                user_id: proposal.user_id.clone(),
                achievement_id: proposal.achievement_id.clone(),
                unlocked_at: Utc::now(),
                progress: Some(proposal.progress),
            };
            unlocks.push(record.clone());
            inserted.push(record);
        }

        Ok(inserted)
    }
}

pub struct Fixture {
    pub habits: Arc<InMemoryHabitRepository>,
    pub logs: Arc<InMemoryHabitLogRepository>,
    pub achievements: Arc<InMemoryAchievementRepository>,
}

impl Fixture {
    pub async fn new(catalog: Vec<Achievement>) -> Self {
        let logs = Arc::new(InMemoryHabitLogRepository::new());
        Self {
            habits: Arc::new(InMemoryHabitRepository::new(logs.clone())),
            logs,
            achievements: Arc::new(InMemoryAchievementRepository::with_catalog(catalog).await),
        }
    }

    pub fn unlock_service(&self) -> Arc<AchievementUnlockService> {
        Arc::new(AchievementUnlockService::new(
            self.habits.clone(),
            self.logs.clone(),
            self.achievements.clone(),
        ))
    }

    pub async fn add_habit(&self, user: &UserId, name: &str, target: f64) -> Habit {
        let habit = Habit::new(
            user.clone(),
            name.to_string(),
            HabitType::Exercise,
            target,
            HabitFrequency::Daily,
        )
        .unwrap();
        self.habits.save(&habit).await.unwrap();
        habit
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn session(user: &UserId) -> Session {
    Session::for_user(user.clone()).unwrap()
}

pub fn admin_session() -> Session {
    Session::new(UserId::from_string("admin"), None, UserRole::Admin).unwrap()
}

pub fn achievement(id: &str, criteria: CriteriaType, threshold: f64, points: u32) -> Achievement {
    Achievement::new(
        AchievementId::from_string(id),
        format!("Achievement {id}"),
        String::new(),
        AchievementCategory::Milestone,
        String::new(),
        criteria,
        threshold,
        points,
    )
    .unwrap()
}
