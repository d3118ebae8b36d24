use habitdock_domain::habit::{Habit, HabitRepository};
use habitdock_domain::session::Session;
use habitdock_domain::shared::{DomainError, HabitId};

/// Load a habit and check the session may act on it
pub(crate) async fn load_owned_habit(
    repo: &dyn HabitRepository,
    session: &Session,
    habit_id: &str,
) -> Result<Habit, DomainError> {
    let habit = repo
        .find_by_id(&HabitId::from_string(habit_id))
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

    session.ensure_owns(habit.user_id())?;
    Ok(habit)
}
