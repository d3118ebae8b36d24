mod achievement_service;
mod config_service;

pub use achievement_service::AchievementUnlockService;
pub use config_service::{AppConfig, ConfigService, LogLevel};
