use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use sqlx::PgPool;
use tracing::warn;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ready = match state.postgres_pool {
        Some(pool) => check_postgres(&pool).await,
        None => true,
    };

    if ready {
        (StatusCode::OK, Json(HealthResponse { status: "ok" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse { status: "degraded" }),
        )
    }
}

async fn check_postgres(pool: &PgPool) -> bool {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(error) => {
            warn!(%error, "postgres health check failed");
            false
        }
    }
}
