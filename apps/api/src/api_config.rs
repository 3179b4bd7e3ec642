use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use coachhub_application::ProjectListingPolicy;
use coachhub_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Command selected by the first CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCommand {
    Serve,
    Migrate,
    Seed,
    ListUsers,
}

impl ApiCommand {
    pub fn from_arg(arg: Option<&str>) -> Result<Self, AppError> {
        match arg {
            None => Ok(Self::Serve),
            Some("migrate") => Ok(Self::Migrate),
            Some("seed") => Ok(Self::Seed),
            Some("list-users") => Ok(Self::ListUsers),
            Some(other) => Err(AppError::Validation(format!(
                "unknown command '{other}', expected one of: migrate, seed, list-users"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    InMemory,
}

impl StorageConfig {
    fn from_values(
        backend: Option<&str>,
        database_url: Option<String>,
        max_connections: Option<&str>,
    ) -> Result<Self, AppError> {
        match backend.unwrap_or("postgres") {
            "postgres" => {
                let database_url = database_url
                    .filter(|value| !value.trim().is_empty())
                    .ok_or_else(|| AppError::Validation("DATABASE_URL is required".to_owned()))?;
                let max_connections = max_connections
                    .map(|value| {
                        value.parse::<u32>().map_err(|error| {
                            AppError::Validation(format!(
                                "invalid DATABASE_MAX_CONNECTIONS '{value}': {error}"
                            ))
                        })
                    })
                    .transpose()?
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS);

                Ok(Self::Postgres {
                    database_url,
                    max_connections,
                })
            }
            "memory" => Ok(Self::InMemory),
            other => Err(AppError::Validation(format!(
                "STORAGE_BACKEND must be either 'postgres' or 'memory', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub command: ApiCommand,
    pub storage: StorageConfig,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub project_listing_policy: ProjectListingPolicy,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let command = ApiCommand::from_arg(env::args().nth(1).as_deref())?;

        let storage = StorageConfig::from_values(
            optional_env("STORAGE_BACKEND").as_deref(),
            optional_env("DATABASE_URL"),
            optional_env("DATABASE_MAX_CONNECTIONS").as_deref(),
        )?;

        let frontend_url =
            optional_env("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = optional_env("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = parse_port(optional_env("API_PORT").as_deref())?;

        let project_listing_policy = optional_env("PROJECT_LISTING_POLICY")
            .map(|value| ProjectListingPolicy::from_str(value.as_str()))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            command,
            storage,
            frontend_url,
            api_host,
            api_port,
            project_listing_policy,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_port(value: Option<&str>) -> Result<u16, AppError> {
    value
        .map(|value| {
            value.parse::<u16>().map_err(|error| {
                AppError::Validation(format!("invalid API_PORT '{value}': {error}"))
            })
        })
        .transpose()
        .map(|port| port.unwrap_or(3000))
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
