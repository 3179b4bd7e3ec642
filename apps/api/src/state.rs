use coachhub_application::{CoachingService, ProjectService, UserService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub coaching_service: CoachingService,
    pub project_service: ProjectService,
    /// Present when the PostgreSQL backend is active; probed by `/health`.
    pub postgres_pool: Option<PgPool>,
}
