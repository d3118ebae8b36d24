mod evaluator;
mod repository;
mod types;


pub use evaluator::{AchievementEvaluator, UnlockMetrics};
pub use repository::AchievementRepository;
pub use types::{
    Achievement, AchievementCategory, CriteriaType, UnlockProposal, UserAchievement,
    UNLOCKED_PROGRESS,
};
