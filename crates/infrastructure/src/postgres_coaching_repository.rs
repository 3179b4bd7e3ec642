use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coachhub_application::{CoachingRepository, FieldFilter, FieldMatch, ResourceRepository};
use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Coaching, CoachingId, ProjectId, UserId};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::coaching_fields::CoachingField;

/// PostgreSQL-backed coaching repository.
#[derive(Clone)]
pub struct PostgresCoachingRepository {
    pool: PgPool,
}

impl PostgresCoachingRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CoachingRow {
    id: Uuid,
    client_id: Uuid,
    coach_id: Uuid,
    project_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CoachingRow> for Coaching {
    fn from(row: CoachingRow) -> Self {
        Coaching::from_parts(
            CoachingId::from_uuid(row.id),
            UserId::from_uuid(row.client_id),
            UserId::from_uuid(row.coach_id),
            ProjectId::from_uuid(row.project_id),
            row.created_at,
            row.updated_at,
        )
    }
}

const SELECT_COACHINGS: &str = r#"
    SELECT id, client_id, coach_id, project_id, created_at, updated_at
    FROM coachings
"#;

#[async_trait]
impl ResourceRepository<Coaching> for PostgresCoachingRepository {
    async fn find_all(&self) -> AppResult<Vec<Coaching>> {
        let query = format!("{SELECT_COACHINGS} ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, CoachingRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to list coachings: {error}")))?;

        Ok(rows.into_iter().map(Coaching::from).collect())
    }

    async fn find_where(&self, filter: FieldFilter) -> AppResult<Vec<Coaching>> {
        let column = CoachingField::parse(filter.field)?.column();
        debug!(field = filter.field, column, "querying coachings by field");

        let rows = match filter.matcher {
            FieldMatch::Equals(value) => {
                let query =
                    format!("{SELECT_COACHINGS} WHERE {column} = $1 ORDER BY created_at, id");
                sqlx::query_as::<_, CoachingRow>(&query)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await
            }
            FieldMatch::In(values) => {
                let query =
                    format!("{SELECT_COACHINGS} WHERE {column} = ANY($1) ORDER BY created_at, id");
                sqlx::query_as::<_, CoachingRow>(&query)
                    .bind(values)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to filter coachings by '{}': {error}",
                filter.field
            ))
        })?;

        Ok(rows.into_iter().map(Coaching::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Coaching>> {
        let query = format!("{SELECT_COACHINGS} WHERE id = $1 LIMIT 1");
        let row = sqlx::query_as::<_, CoachingRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to find coaching: {error}")))?;

        Ok(row.map(Coaching::from))
    }
}

#[async_trait]
impl CoachingRepository for PostgresCoachingRepository {
    async fn save_coaching(&self, coaching: Coaching) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO coachings (id, client_id, coach_id, project_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET client_id = EXCLUDED.client_id,
                coach_id = EXCLUDED.coach_id,
                project_id = EXCLUDED.project_id,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(coaching.id().as_uuid())
        .bind(coaching.client_id().as_uuid())
        .bind(coaching.coach_id().as_uuid())
        .bind(coaching.project_id().as_uuid())
        .bind(coaching.created_at())
        .bind(coaching.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save coaching: {error}")))?;

        Ok(())
    }

    async fn delete_all_coachings(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM coachings")
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete coachings: {error}")))?;

        Ok(())
    }
}
