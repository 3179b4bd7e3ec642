use std::fmt::{Display, Formatter};
use std::str::FromStr;

use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Project, Role, User};

use crate::AccessControlService;

/// Which roles may list projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectListingPolicy {
    /// Only `ops` and `pm` may list projects.
    #[default]
    ManagersOnly,
    /// Clients and coaches may also list the projects of their coachings.
    Transitive,
}

impl ProjectListingPolicy {
    /// Returns a stable configuration value for this policy.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManagersOnly => "managers_only",
            Self::Transitive => "transitive",
        }
    }

    /// Returns whether the role may list projects under this policy.
    #[must_use]
    pub fn allows(&self, role: &Role) -> bool {
        match role {
            Role::Ops | Role::Pm => true,
            Role::Client | Role::Coach => matches!(self, Self::Transitive),
            Role::Unrecognized(_) => false,
        }
    }
}

impl FromStr for ProjectListingPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "managers_only" => Ok(Self::ManagersOnly),
            "transitive" => Ok(Self::Transitive),
            _ => Err(AppError::Validation(format!(
                "unknown project listing policy '{value}'"
            ))),
        }
    }
}

impl Display for ProjectListingPolicy {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Application service for project reads.
#[derive(Clone)]
pub struct ProjectService {
    access_control: AccessControlService,
    policy: ProjectListingPolicy,
}

impl ProjectService {
    /// Creates the service from the resolver and the listing policy.
    #[must_use]
    pub fn new(access_control: AccessControlService, policy: ProjectListingPolicy) -> Self {
        Self {
            access_control,
            policy,
        }
    }

    /// Lists the projects visible to the user.
    pub async fn list_projects(&self, user: &User) -> AppResult<Vec<Project>> {
        if !self.policy.allows(user.role()) {
            return Err(AppError::Forbidden("Forbidden".to_owned()));
        }

        self.access_control.accessible_projects(user).await
    }
}
