use async_trait::async_trait;
use coachhub_application::ProjectRepository;
use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Project, ProjectId, UserId};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// PostgreSQL-backed project repository.
///
/// Managers are stored inline as a UUID array, indexed with GIN for
/// membership lookups.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: Uuid,
    manager_ids: Vec<Uuid>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project::from_parts(
            ProjectId::from_uuid(row.id),
            row.manager_ids.into_iter().map(UserId::from_uuid).collect(),
        )
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, manager_ids
            FROM projects
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list projects: {error}")))?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn list_projects_managed_by(&self, user_id: UserId) -> AppResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, manager_ids
            FROM projects
            WHERE manager_ids @> ARRAY[$1]::UUID[]
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list projects managed by user: {error}"))
        })?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn list_projects_by_ids(&self, project_ids: &[ProjectId]) -> AppResult<Vec<Project>> {
        let ids: Vec<Uuid> = project_ids.iter().map(ProjectId::as_uuid).collect();
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, manager_ids
            FROM projects
            WHERE id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list projects by id: {error}")))?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn save_project(&self, project: Project) -> AppResult<()> {
        let manager_ids: Vec<Uuid> = project.manager_ids().iter().map(UserId::as_uuid).collect();

        sqlx::query(
            r#"
            INSERT INTO projects (id, manager_ids)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET manager_ids = EXCLUDED.manager_ids,
                updated_at = now()
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(manager_ids)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save project: {error}")))?;

        Ok(())
    }

    async fn delete_all_projects(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM projects")
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete projects: {error}")))?;

        Ok(())
    }
}
