mod achievement_handlers;
mod archive_habit_handler;
mod create_habit_handler;
mod delete_habit_handler;
mod log_habit_handler;
mod update_habit_handler;


pub use achievement_handlers::{CheckAchievementsCommandHandler, ImportAchievementsCommandHandler};
pub use archive_habit_handler::ArchiveHabitCommandHandler;
pub use create_habit_handler::CreateHabitCommandHandler;
pub use delete_habit_handler::DeleteHabitCommandHandler;
pub use log_habit_handler::LogHabitCommandHandler;
pub use update_habit_handler::UpdateHabitCommandHandler;
