use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::persistence::{RepositoryErrorMapper, SqliteRepositoryBase};
use habitdock_domain::achievement::{
    Achievement, AchievementCategory, AchievementRepository, CriteriaType, UnlockProposal,
    UserAchievement,
};
use habitdock_domain::shared::{AchievementId, DomainError, UserId};

#[derive(FromRow)]
struct AchievementRow {
    id: String,
    name: String,
    description: String,
    category: String,
    icon: String,
    criteria_type: String,
    criteria_value: f64,
    points: i64,
    created_at: DateTime<Utc>,
}

impl AchievementRow {
    fn try_into_achievement(self) -> Result<Achievement, DomainError> {
        let category = AchievementCategory::from_str(&self.category).map_err(|e| {
            DomainError::DataIntegrity(format!("Achievement {}: {}", self.id, e))
        })?;
        let points = u32::try_from(self.points).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Achievement {}: invalid points {}",
                self.id, self.points
            ))
        })?;

        Ok(Achievement::restore(
            AchievementId::from_string(&self.id),
            self.name,
            self.description,
            category,
            self.icon,
            CriteriaType::from(self.criteria_type),
            self.criteria_value,
            points,
            self.created_at,
        ))
    }
}

#[derive(FromRow)]
struct UserAchievementRow {
    id: String,
    user_id: String,
    achievement_id: String,
    unlocked_at: DateTime<Utc>,
    progress: Option<i64>,
}

impl UserAchievementRow {
    fn into_user_achievement(self) -> UserAchievement {
        UserAchievement {
            id: self.id,
            user_id: UserId::from_string(&self.user_id),
            achievement_id: AchievementId::from_string(&self.achievement_id),
            unlocked_at: self.unlocked_at,
            progress: self.progress.and_then(|p| u8::try_from(p).ok()),
        }
    }
}

const UPSERT_ACHIEVEMENT: &str = r#"
    INSERT INTO achievements (
        id, name, description, category, icon, criteria_type, criteria_value, points, created_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    ON CONFLICT(id) DO UPDATE SET
        name = ?2,
        description = ?3,
        category = ?4,
        icon = ?5,
        criteria_type = ?6,
        criteria_value = ?7,
        points = ?8
"#;

fn bind_achievement<'q>(
    sql: &'q str,
    achievement: &'q Achievement,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    sqlx::query(sql)
        .bind(achievement.id().as_str())
        .bind(achievement.name())
        .bind(achievement.description())
        .bind(achievement.category().as_str())
        .bind(achievement.icon())
        .bind(achievement.criteria_type().as_str())
        .bind(achievement.criteria_value())
        .bind(i64::from(achievement.points()))
        .bind(achievement.created_at())
}

pub struct SqliteAchievementRepository {
    base: SqliteRepositoryBase,
}

impl SqliteAchievementRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl AchievementRepository for SqliteAchievementRepository {
    async fn save(&self, achievement: &Achievement) -> Result<(), DomainError> {
        self.base
            .execute(bind_achievement(UPSERT_ACHIEVEMENT, achievement), "Save achievement")
            .await?;

        Ok(())
    }

    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), DomainError> {
        if achievements.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        for achievement in achievements {
            bind_achievement(UPSERT_ACHIEVEMENT, achievement)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    RepositoryErrorMapper::map_sqlx_error(
                        e,
                        &format!("Save achievement {}", achievement.id()),
                    )
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        info!(saved = achievements.len(), "[achievement] Catalog entries saved");

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Achievement>, DomainError> {
        let query = r#"
            SELECT id, name, description, category, icon, criteria_type, criteria_value, points, created_at
            FROM achievements
            ORDER BY points ASC, id ASC
        "#;

        let rows: Vec<AchievementRow> = self
            .base
            .fetch_all(sqlx::query_as(query), "Find all achievements")
            .await?;

        rows.into_iter()
            .map(|r| r.try_into_achievement())
            .collect()
    }

    async fn find_unlocked_ids(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<AchievementId>, DomainError> {
        let rows: Vec<(String,)> = self
            .base
            .fetch_all(
                sqlx::query_as("SELECT achievement_id FROM user_achievements WHERE user_id = ?1")
                    .bind(user_id.as_str()),
                "Find unlocked achievement ids",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id,)| AchievementId::from_string(&id))
            .collect())
    }

    async fn find_user_achievements(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserAchievement>, DomainError> {
        let query = r#"
            SELECT id, user_id, achievement_id, unlocked_at, progress
            FROM user_achievements
            WHERE user_id = ?1
            ORDER BY unlocked_at ASC, id ASC
        "#;

        let rows: Vec<UserAchievementRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find user achievements",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(UserAchievementRow::into_user_achievement)
            .collect())
    }

    async fn insert_unlocks(
        &self,
        proposals: &[UnlockProposal],
    ) -> Result<Vec<UserAchievement>, DomainError> {
        if proposals.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        let unlocked_at = Utc::now();
        let mut inserted = Vec::with_capacity(proposals.len());

        for proposal in proposals {
            let id = Uuid::new_v4().to_string();
            let result = sqlx::query(
                r#"
                INSERT INTO user_achievements (id, user_id, achievement_id, unlocked_at, progress)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(user_id, achievement_id) DO NOTHING
                "#,
            )
            .bind(&id)
            .bind(proposal.user_id.as_str())
            .bind(proposal.achievement_id.as_str())
            .bind(unlocked_at)
            .bind(i64::from(proposal.progress))
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert achievement unlock"))?;

            if result.rows_affected() > 0 {
                inserted.push(UserAchievement {
                    id,
                    user_id: proposal.user_id.clone(),
                    achievement_id: proposal.achievement_id.clone(),
                    unlocked_at,
                    progress: Some(proposal.progress),
                });
            }
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        info!(
            proposed = proposals.len(),
            inserted = inserted.len(),
            "[achievement] Unlocks persisted"
        );

        Ok(inserted)
    }
}
