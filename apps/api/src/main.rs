//! CoachHub API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use coachhub_core::AppError;
use coachhub_infrastructure::InMemoryStore;
use sqlx::PgPool;
use tracing::{error, info};

use crate::api_config::{ApiCommand, ApiConfig, StorageConfig};
use crate::api_services::RepositorySet;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;
    let (repositories, postgres_pool) = open_store(&config.storage).await?;

    let result = match config.command {
        ApiCommand::Migrate => {
            if postgres_pool.is_none() {
                info!("memory storage backend has no migrations to apply");
            }
            Ok(())
        }
        ApiCommand::Seed => dev_seed::seed(&repositories).await.map(|_| ()),
        ApiCommand::ListUsers => {
            let app_state = api_services::build_app_state(
                &repositories,
                config.project_listing_policy,
                postgres_pool.clone(),
            );
            dev_seed::list_users(&app_state.user_service)
                .await
                .map(|_| ())
        }
        ApiCommand::Serve => serve(&config, &repositories, postgres_pool.clone()).await,
    };

    if let Some(pool) = postgres_pool {
        pool.close().await;
        info!("database pool closed");
    }

    result
}

async fn open_store(storage: &StorageConfig) -> Result<(RepositorySet, Option<PgPool>), AppError> {
    match storage {
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = api_services::connect_and_migrate(database_url, *max_connections).await?;
            Ok((RepositorySet::postgres(&pool), Some(pool)))
        }
        StorageConfig::InMemory => {
            let repositories = RepositorySet::in_memory(Arc::new(InMemoryStore::new()));
            dev_seed::seed(&repositories).await?;
            Ok((repositories, None))
        }
    }
}

async fn serve(
    config: &ApiConfig,
    repositories: &RepositorySet,
    postgres_pool: Option<PgPool>,
) -> Result<(), AppError> {
    let app_state = api_services::build_app_state(
        repositories,
        config.project_listing_policy,
        postgres_pool,
    );
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(
        %address,
        project_listing_policy = %config.project_listing_policy,
        "coachhub-api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => error!(%error, "failed to listen for shutdown signal"),
    }
}
