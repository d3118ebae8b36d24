use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{AchievementId, DomainError, UserId};

/// Progress recorded on every unlock produced by the evaluator
pub const UNLOCKED_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Consistency,
    Milestone,
    Challenge,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Consistency => "consistency",
            AchievementCategory::Milestone => "milestone",
            AchievementCategory::Challenge => "challenge",
        }
    }
}

impl FromStr for AchievementCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consistency" => Ok(AchievementCategory::Consistency),
            "milestone" => Ok(AchievementCategory::Milestone),
            "challenge" => Ok(AchievementCategory::Challenge),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown achievement category: {s}"
            ))),
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metric an achievement rule is evaluated against.
///
/// Unrecognised values are kept as `Unknown` so catalogs can carry rule
/// types this version does not evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CriteriaType {
    Streak,
    TotalLogs,
    Consistency,
    Milestone,
    Unknown(String),
}

impl CriteriaType {
    pub fn as_str(&self) -> &str {
        match self {
            CriteriaType::Streak => "streak",
            CriteriaType::TotalLogs => "total_logs",
            CriteriaType::Consistency => "consistency",
            CriteriaType::Milestone => "milestone",
            CriteriaType::Unknown(raw) => raw,
        }
    }

    /// Human-readable label ("total logs")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<&str> for CriteriaType {
    fn from(value: &str) -> Self {
        match value {
            "streak" => CriteriaType::Streak,
            "total_logs" => CriteriaType::TotalLogs,
            "consistency" => CriteriaType::Consistency,
            "milestone" => CriteriaType::Milestone,
            other => CriteriaType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for CriteriaType {
    fn from(value: String) -> Self {
        CriteriaType::from(value.as_str())
    }
}

impl From<CriteriaType> for String {
    fn from(value: CriteriaType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog rule that unlocks once a user's aggregate metric crosses a threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    id: AchievementId,
    name: String,
    description: String,
    category: AchievementCategory,
    icon: String,
    criteria_type: CriteriaType,
    criteria_value: f64,
    points: u32,
    created_at: DateTime<Utc>,
}

impl Achievement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AchievementId,
        name: String,
        description: String,
        category: AchievementCategory,
        icon: String,
        criteria_type: CriteriaType,
        criteria_value: f64,
        points: u32,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Achievement name cannot be empty".to_string(),
            ));
        }
        if !criteria_value.is_finite() || criteria_value < 0.0 {
            return Err(DomainError::Validation(
                "Achievement threshold must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            description,
            category,
            icon,
            criteria_type,
            criteria_value,
            points,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: AchievementId,
        name: String,
        description: String,
        category: AchievementCategory,
        icon: String,
        criteria_type: CriteriaType,
        criteria_value: f64,
        points: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            icon,
            criteria_type,
            criteria_value,
            points,
            created_at,
        }
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> AchievementCategory {
        self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn criteria_type(&self) -> &CriteriaType {
        &self.criteria_type
    }

    pub fn criteria_value(&self) -> f64 {
        self.criteria_value
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A persisted unlock, unique per `(user_id, achievement_id)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAchievement {
    pub id: String,
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub unlocked_at: DateTime<Utc>,
    pub progress: Option<u8>,
}

/// Candidate unlock emitted by the evaluator, pending persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockProposal {
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub progress: u8,
}
