// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod achievement;
pub mod habit;
pub mod habit_log;
pub mod session;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use shared::{AchievementId, DomainError, HabitId, LogId, UserId};
