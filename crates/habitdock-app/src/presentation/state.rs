use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{AchievementQueries, DashboardQueries, HabitQueryService};
use crate::application::services::{AchievementUnlockService, ConfigService};
use habitdock_domain::achievement::AchievementRepository;
use habitdock_domain::habit::HabitRepository;
use habitdock_domain::habit_log::HabitLogRepository;

/// Command handlers container
pub struct CommandHandlers {
    pub create_habit: Arc<CreateHabitCommandHandler>,
    pub update_habit: Arc<UpdateHabitCommandHandler>,
    pub archive_habit: Arc<ArchiveHabitCommandHandler>,
    pub delete_habit: Arc<DeleteHabitCommandHandler>,
    pub log_habit: Arc<LogHabitCommandHandler>,
    pub check_achievements: Arc<CheckAchievementsCommandHandler>,
    pub import_achievements: Arc<ImportAchievementsCommandHandler>,
}

pub struct Repositories {
    pub habit: Arc<dyn HabitRepository>,
    pub habit_log: Arc<dyn HabitLogRepository>,
    pub achievement: Arc<dyn AchievementRepository>,
}

pub struct Services {
    pub config: Arc<ConfigService>,
    pub achievement_unlock: Arc<AchievementUnlockService>,
}

pub struct Queries {
    pub habits: Arc<HabitQueryService>,
    pub dashboard: Arc<DashboardQueries>,
    pub achievements: Arc<AchievementQueries>,
}

pub struct AppState {
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    /// Wire services, queries and handlers on top of the given repositories
    pub fn new(repositories: Repositories, config: Arc<ConfigService>) -> Self {
        let achievement_unlock = Arc::new(AchievementUnlockService::new(
            repositories.habit.clone(),
            repositories.habit_log.clone(),
            repositories.achievement.clone(),
        ));

        let queries = Queries {
            habits: Arc::new(HabitQueryService::new(
                repositories.habit.clone(),
                repositories.habit_log.clone(),
                config.completion_window_days(),
            )),
            dashboard: Arc::new(DashboardQueries::new(
                repositories.habit.clone(),
                repositories.habit_log.clone(),
                repositories.achievement.clone(),
            )),
            achievements: Arc::new(AchievementQueries::new(repositories.achievement.clone())),
        };

        let command_handlers = CommandHandlers {
            create_habit: Arc::new(CreateHabitCommandHandler::new(repositories.habit.clone())),
            update_habit: Arc::new(UpdateHabitCommandHandler::new(repositories.habit.clone())),
            archive_habit: Arc::new(ArchiveHabitCommandHandler::new(repositories.habit.clone())),
            delete_habit: Arc::new(DeleteHabitCommandHandler::new(repositories.habit.clone())),
            log_habit: Arc::new(LogHabitCommandHandler::new(
                repositories.habit.clone(),
                repositories.habit_log.clone(),
                achievement_unlock.clone(),
            )),
            check_achievements: Arc::new(CheckAchievementsCommandHandler::new(
                achievement_unlock.clone(),
            )),
            import_achievements: Arc::new(ImportAchievementsCommandHandler::new(
                repositories.achievement.clone(),
            )),
        };

        Self {
            repositories,
            services: Services {
                config,
                achievement_unlock,
            },
            queries,
            command_handlers,
        }
    }
}
