mod achievement_dto;
mod dashboard_dto;
mod habit_dto;

pub use achievement_dto::*;
pub use dashboard_dto::*;
pub use habit_dto::*;
