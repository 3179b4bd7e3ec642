//! Application services and ports.

#![forbid(unsafe_code)]

mod access_control_service;
mod coaching_service;
mod project_service;
mod resource_ports;
mod user_service;

#[cfg(test)]
mod test_support;

pub use access_control_service::AccessControlService;
pub use coaching_service::CoachingService;
pub use project_service::{ProjectListingPolicy, ProjectService};
pub use resource_ports::{
    CoachingRepository, FieldFilter, FieldMatch, ProjectRepository, ResourceRepository,
    UserRepository,
};
pub use user_service::UserService;
