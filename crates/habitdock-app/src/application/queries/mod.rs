mod achievement_queries;
mod dashboard_queries;
mod habit_queries;

pub use achievement_queries::AchievementQueries;
pub use dashboard_queries::DashboardQueries;
pub use habit_queries::HabitQueryService;
