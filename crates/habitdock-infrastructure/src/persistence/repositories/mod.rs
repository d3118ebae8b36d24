mod achievement_repo;
mod habit_log_repo;
mod habit_repo;

pub use achievement_repo::SqliteAchievementRepository;
pub use habit_log_repo::SqliteHabitLogRepository;
pub use habit_repo::SqliteHabitRepository;
