use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatsDto {
    pub date: String,
    pub total_habits: u32,
    pub active_habits: u32,
    pub today_completed: u32,
    pub today_total: u32,
    pub current_week_completion: u8,
    pub total_achievements: u32,
    pub wellness_score: u8,
}
