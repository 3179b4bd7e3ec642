use std::sync::Arc;

use coachhub_application::{
    AccessControlService, CoachingRepository, CoachingService, ProjectListingPolicy,
    ProjectRepository, ProjectService, UserRepository, UserService,
};
use coachhub_infrastructure::{
    InMemoryStore, PostgresCoachingRepository, PostgresProjectRepository, PostgresUserRepository,
};
use sqlx::PgPool;

use crate::state::AppState;

/// Store handles shared by the services and the seeding commands.
#[derive(Clone)]
pub struct RepositorySet {
    pub user_repository: Arc<dyn UserRepository>,
    pub project_repository: Arc<dyn ProjectRepository>,
    pub coaching_repository: Arc<dyn CoachingRepository>,
}

impl RepositorySet {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
            project_repository: Arc::new(PostgresProjectRepository::new(pool.clone())),
            coaching_repository: Arc::new(PostgresCoachingRepository::new(pool.clone())),
        }
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            user_repository: store.clone(),
            project_repository: store.clone(),
            coaching_repository: store,
        }
    }
}

pub fn build_app_state(
    repositories: &RepositorySet,
    project_listing_policy: ProjectListingPolicy,
    postgres_pool: Option<PgPool>,
) -> AppState {
    let access_control = AccessControlService::new(
        repositories.project_repository.clone(),
        repositories.coaching_repository.clone(),
    );

    AppState {
        user_service: UserService::new(repositories.user_repository.clone()),
        coaching_service: CoachingService::new(
            access_control.clone(),
            repositories.coaching_repository.clone(),
        ),
        project_service: ProjectService::new(access_control, project_listing_policy),
        postgres_pool,
    }
}
