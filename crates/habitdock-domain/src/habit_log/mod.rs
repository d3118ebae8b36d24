mod entity;
mod repository;

pub use entity::HabitLog;
pub use repository::HabitLogRepository;
