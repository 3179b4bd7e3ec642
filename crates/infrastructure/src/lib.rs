//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod coaching_fields;
mod in_memory_store;
mod postgres_coaching_repository;
mod postgres_project_repository;
mod postgres_user_repository;

pub use in_memory_store::InMemoryStore;
pub use postgres_coaching_repository::PostgresCoachingRepository;
pub use postgres_project_repository::PostgresProjectRepository;
pub use postgres_user_repository::PostgresUserRepository;
