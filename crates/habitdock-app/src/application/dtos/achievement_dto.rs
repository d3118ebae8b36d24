use serde::{Deserialize, Serialize};

use habitdock_domain::achievement::{
    Achievement, AchievementCategory, CriteriaType, UserAchievement,
};
use habitdock_domain::shared::{AchievementId, DomainError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    pub criteria_type: String,
    pub criteria_label: String,
    pub criteria_value: f64,
    pub points: u32,
    pub unlocked: bool,
    pub unlocked_at: Option<String>,
}

impl AchievementDto {
    pub fn from_catalog(achievement: &Achievement, unlock: Option<&UserAchievement>) -> Self {
        Self {
            id: achievement.id().as_str().to_string(),
            name: achievement.name().to_string(),
            description: achievement.description().to_string(),
            category: achievement.category().as_str().to_string(),
            icon: achievement.icon().to_string(),
            criteria_type: achievement.criteria_type().as_str().to_string(),
            criteria_label: achievement.criteria_type().label(),
            criteria_value: achievement.criteria_value(),
            points: achievement.points(),
            unlocked: unlock.is_some(),
            unlocked_at: unlock.map(|u| u.unlocked_at.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementBoardDto {
    pub achievements: Vec<AchievementDto>,
    pub unlocked_count: u32,
    pub total_count: u32,
    pub total_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievementDto {
    pub achievement_id: String,
    pub name: String,
    pub points: u32,
    pub progress: u8,
}

/// Catalog entry as written in an import file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDefinitionDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: AchievementCategory,
    #[serde(default)]
    pub icon: String,
    pub criteria_type: CriteriaType,
    pub criteria_value: f64,
    #[serde(default)]
    pub points: u32,
}

impl AchievementDefinitionDto {
    pub fn into_achievement(self) -> Result<Achievement, DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Achievement id cannot be empty".to_string(),
            ));
        }

        Achievement::new(
            AchievementId::from_string(self.id.trim()),
            self.name,
            self.description,
            self.category,
            self.icon,
            self.criteria_type,
            self.criteria_value,
            self.points,
        )
    }
}
