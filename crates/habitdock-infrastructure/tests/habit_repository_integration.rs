use std::sync::Arc;

use habitdock_domain::habit::{HabitRepository, HabitType, Reminder};
use habitdock_domain::habit_log::{HabitLog, HabitLogRepository};
use habitdock_domain::shared::{DomainError, HabitId, LogId, UserId};
use habitdock_infrastructure::persistence::repositories::{
    SqliteHabitLogRepository, SqliteHabitRepository,
};

mod test_helpers;

#[tokio::test]
async fn habit_repo_save_find_and_update_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));
    let user = UserId::new();

    let mut habit = test_helpers::create_habit(&repo, &user, "Drink water", 8.0).await;

    let fetched = repo
        .find_by_id(habit.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.name(), "Drink water");
    assert_eq!(fetched.habit_type(), HabitType::Water);
    assert_eq!(fetched.target_value(), 8.0);
    assert!(!fetched.is_archived());

    habit.rename("Hydrate".to_string()).expect("rename");
    habit.set_target(10.0).expect("set target");
    habit.set_reminder(Reminder::new(true, Some("08:30".to_string())).expect("reminder"));
    repo.save(&habit).await.expect("update");

    let updated = repo
        .find_by_id(habit.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(updated.name(), "Hydrate");
    assert_eq!(updated.target_value(), 10.0);
    assert!(updated.reminder().enabled);
    assert_eq!(updated.reminder().time.as_deref(), Some("08:30"));
}

#[tokio::test]
async fn habit_repo_lists_only_active_habits_of_user() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));
    let user = UserId::new();
    let other = UserId::new();

    let kept = test_helpers::create_habit(&repo, &user, "Run", 1.0).await;
    let mut archived = test_helpers::create_habit(&repo, &user, "Sleep", 8.0).await;
    test_helpers::create_habit(&repo, &other, "Someone else", 1.0).await;

    archived.archive().expect("archive");
    repo.save(&archived).await.expect("save archived");

    let active = repo.find_active_by_user(&user).await.expect("list");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), kept.id());
}

#[tokio::test]
async fn habit_repo_delete_removes_logs() {
    let pool = test_helpers::setup_in_memory_db().await;
    let habits = SqliteHabitRepository::new(Arc::new(pool.clone()));
    let logs = SqliteHabitLogRepository::new(Arc::new(pool.clone()));
    let user = UserId::new();

    let habit = test_helpers::create_habit(&habits, &user, "Walk", 1.0).await;
    let log = HabitLog::record(LogId::new(), &habit, test_helpers::date("2024-05-01"), 1.0, None)
        .expect("record");
    logs.upsert(&log).await.expect("upsert");

    habits.delete(habit.id()).await.expect("delete");

    assert!(habits.find_by_id(habit.id()).await.expect("find").is_none());
    let remaining = logs
        .find_by_habit(habit.id(), None, None)
        .await
        .expect("logs");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn habit_repo_delete_unknown_habit_is_not_found() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let result = repo.delete(&HabitId::from_string("missing")).await;

    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));
}

#[tokio::test]
async fn habit_repo_rejects_corrupt_habit_type() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool.clone()));
    let user = UserId::new();
    let habit = test_helpers::create_habit(&repo, &user, "Mood", 5.0).await;

    sqlx::query("UPDATE habits SET habit_type = 'juggling' WHERE id = ?1")
        .bind(habit.id().as_str())
        .execute(&pool)
        .await
        .expect("corrupt row");

    let result = repo.find_by_id(habit.id()).await;
    assert!(matches!(result, Err(DomainError::DataIntegrity(_))));
}
