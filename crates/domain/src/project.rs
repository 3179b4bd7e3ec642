use serde::{Deserialize, Serialize};

use crate::{ProjectId, UserId};

/// A project and the users managing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    manager_ids: Vec<UserId>,
}

impl Project {
    /// Creates a project with a fresh identity.
    #[must_use]
    pub fn new(manager_ids: Vec<UserId>) -> Self {
        Self::from_parts(ProjectId::new(), manager_ids)
    }

    /// Rebuilds a project from stored values. Duplicate managers are collapsed.
    #[must_use]
    pub fn from_parts(id: ProjectId, manager_ids: Vec<UserId>) -> Self {
        let mut unique_manager_ids = Vec::with_capacity(manager_ids.len());
        for manager_id in manager_ids {
            if !unique_manager_ids.contains(&manager_id) {
                unique_manager_ids.push(manager_id);
            }
        }

        Self {
            id,
            manager_ids: unique_manager_ids,
        }
    }

    /// Returns the project identity.
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the managers of this project.
    #[must_use]
    pub fn manager_ids(&self) -> &[UserId] {
        self.manager_ids.as_slice()
    }

    /// Returns whether the user is listed as a manager.
    #[must_use]
    pub fn is_managed_by(&self, user_id: UserId) -> bool {
        self.manager_ids.contains(&user_id)
    }
}
