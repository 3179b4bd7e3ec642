use async_trait::async_trait;
use coachhub_application::UserRepository;
use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Role, User, UserId};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// PostgreSQL-backed user repository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    role: String,
    first_name: String,
    last_name: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        User::from_parts(
            UserId::from_uuid(row.id),
            Role::from(row.role),
            row.first_name,
            row.last_name,
        )
        .map_err(|error| {
            AppError::Internal(format!("failed to decode user '{}': {error}", row.id))
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, role, first_name, last_name
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by id: {error}")))?;

        row.map(User::try_from).transpose()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, role, first_name, last_name
            FROM users
            ORDER BY role, first_name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list users: {error}")))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn save_user(&self, user: User) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, role, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET role = EXCLUDED.role,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                updated_at = now()
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.role().as_str())
        .bind(user.first_name())
        .bind(user.last_name())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save user: {error}")))?;

        Ok(())
    }

    async fn delete_all_users(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete users: {error}")))?;

        Ok(())
    }
}
