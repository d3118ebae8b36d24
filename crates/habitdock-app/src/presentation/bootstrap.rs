use std::sync::Arc;
use tracing::info;

use super::state::{AppState, Repositories};
use crate::application::services::ConfigService;
use habitdock_domain::shared::DomainError;
use habitdock_infrastructure::persistence::repositories::{
    SqliteAchievementRepository, SqliteHabitLogRepository, SqliteHabitRepository,
};
use habitdock_infrastructure::persistence::Database;

/// Open the configured database, migrate it and wire the application
pub async fn build_app_state(config: Arc<ConfigService>) -> Result<AppState, DomainError> {
    let db_path = config.database_path();
    let db = Database::new(&db_path.to_string_lossy()).await?;
    db.run_migrations().await?;

    info!(db_path = %db_path.display(), "Database ready");

    let pool = Arc::new(db.pool().clone());
    let repositories = Repositories {
        habit: Arc::new(SqliteHabitRepository::new(pool.clone())),
        habit_log: Arc::new(SqliteHabitLogRepository::new(pool.clone())),
        achievement: Arc::new(SqliteAchievementRepository::new(pool)),
    };

    Ok(AppState::new(repositories, config))
}
