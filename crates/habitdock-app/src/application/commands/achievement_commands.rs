use chrono::NaiveDate;

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{AchievementDefinitionDto, UnlockedAchievementDto};

/// Re-evaluate the caller's achievements as of `today`
#[derive(Debug, Clone)]
pub struct CheckAchievementsCommand {
    pub today: NaiveDate,
}

impl Command for CheckAchievementsCommand {}

#[derive(Debug, Clone)]
pub struct CheckAchievementsResult {
    pub unlocked: Vec<UnlockedAchievementDto>,
}

/// Insert or update catalog entries (admin only)
#[derive(Debug, Clone)]
pub struct ImportAchievementsCommand {
    pub definitions: Vec<AchievementDefinitionDto>,
}

impl Command for ImportAchievementsCommand {}

#[derive(Debug, Clone)]
pub struct ImportAchievementsResult {
    pub imported: usize,
}
