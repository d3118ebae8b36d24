use async_trait::async_trait;

use super::aggregate::Habit;
use crate::shared::{DomainError, HabitId, UserId};

/// Habit repository trait
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert or update a habit
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// Non-archived habits of a user, newest first
    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError>;

    /// Delete a habit together with its logs
    async fn delete(&self, id: &HabitId) -> Result<(), DomainError>;
}
