//! Role and relationship scoped read access.
//!
//! Decision table evaluated on the caller's role:
//! - `ops`: every record.
//! - `pm`: records whose project lists the caller as manager.
//! - `client` / `coach`: records naming the caller in that role.
//! - anything else: nothing, without touching the store.

use std::sync::Arc;

use coachhub_core::AppResult;
use coachhub_domain::{Coaching, Project, ProjectId, RelationshipFields, Role, User, UserId};
use tracing::debug;
use uuid::Uuid;

use crate::{CoachingRepository, FieldFilter, ProjectRepository, ResourceRepository};

/// Resolves which records of a relationship-scoped resource a user may read.
#[derive(Clone)]
pub struct AccessControlService {
    project_repository: Arc<dyn ProjectRepository>,
    coaching_repository: Arc<dyn CoachingRepository>,
}

/// Store query implied by a role for bulk reads.
#[derive(Debug)]
enum ResourceScope {
    All,
    Filtered(FieldFilter),
    Denied,
}

impl AccessControlService {
    /// Creates the resolver over the project and coaching stores.
    #[must_use]
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        coaching_repository: Arc<dyn CoachingRepository>,
    ) -> Self {
        Self {
            project_repository,
            coaching_repository,
        }
    }

    /// Returns the records of a resource kind visible to the user.
    ///
    /// Unrecognized roles yield an empty list and issue no query. Store
    /// failures propagate unchanged.
    pub async fn filtered_resources<R>(
        &self,
        user: &User,
        fields: &RelationshipFields<R>,
        repository: &dyn ResourceRepository<R>,
    ) -> AppResult<Vec<R>>
    where
        R: Send + Sync + 'static,
    {
        let records = match self.resource_scope(user, fields).await? {
            ResourceScope::All => repository.find_all().await?,
            ResourceScope::Filtered(filter) => repository.find_where(filter).await?,
            ResourceScope::Denied => Vec::new(),
        };

        debug!(
            user_id = %user.id(),
            role = %user.role(),
            records = records.len(),
            "resolved visible resources"
        );

        Ok(records)
    }

    /// Returns whether one record is visible to the user.
    ///
    /// A missing record is not visible, whatever the role.
    pub async fn has_resource_access<R>(
        &self,
        user: &User,
        resource_id: Uuid,
        fields: &RelationshipFields<R>,
        repository: &dyn ResourceRepository<R>,
    ) -> AppResult<bool>
    where
        R: Send + Sync + 'static,
    {
        Ok(self
            .accessible_resource(user, resource_id, fields, repository)
            .await?
            .is_some())
    }

    /// Loads one record and returns it only when visible to the user.
    pub async fn accessible_resource<R>(
        &self,
        user: &User,
        resource_id: Uuid,
        fields: &RelationshipFields<R>,
        repository: &dyn ResourceRepository<R>,
    ) -> AppResult<Option<R>>
    where
        R: Send + Sync + 'static,
    {
        let Some(record) = repository.find_by_id(resource_id).await? else {
            debug!(user_id = %user.id(), %resource_id, "resource not found");
            return Ok(None);
        };

        let visible = match user.role() {
            Role::Ops => true,
            Role::Pm => match fields.project.read(&record) {
                Some(project_id) => self
                    .managed_project_ids(user.id())
                    .await?
                    .contains(&project_id),
                None => false,
            },
            Role::Client => fields.client.read(&record) == Some(user.id()),
            Role::Coach => fields.coach.read(&record) == Some(user.id()),
            Role::Unrecognized(_) => false,
        };

        debug!(
            user_id = %user.id(),
            role = %user.role(),
            %resource_id,
            visible,
            "resolved resource access"
        );

        Ok(visible.then_some(record))
    }

    /// Returns the projects visible to the user.
    ///
    /// Clients and coaches reach projects through their coachings; each
    /// project is returned once however many coachings reference it.
    pub async fn accessible_projects(&self, user: &User) -> AppResult<Vec<Project>> {
        let projects = match user.role() {
            Role::Ops => self.project_repository.list_projects().await?,
            Role::Pm => {
                self.project_repository
                    .list_projects_managed_by(user.id())
                    .await?
            }
            Role::Client | Role::Coach => {
                let fields = Coaching::relationship_fields();
                let participant_field = if matches!(user.role(), Role::Client) {
                    fields.client.name()
                } else {
                    fields.coach.name()
                };

                let coachings = self
                    .coaching_repository
                    .find_where(FieldFilter::equals(participant_field, user.id()))
                    .await?;

                let mut project_ids: Vec<ProjectId> = Vec::with_capacity(coachings.len());
                for coaching in &coachings {
                    if !project_ids.contains(&coaching.project_id()) {
                        project_ids.push(coaching.project_id());
                    }
                }

                self.project_repository
                    .list_projects_by_ids(&project_ids)
                    .await?
            }
            Role::Unrecognized(_) => Vec::new(),
        };

        debug!(
            user_id = %user.id(),
            role = %user.role(),
            projects = projects.len(),
            "resolved visible projects"
        );

        Ok(projects)
    }

    async fn resource_scope<R>(
        &self,
        user: &User,
        fields: &RelationshipFields<R>,
    ) -> AppResult<ResourceScope> {
        let scope = match user.role() {
            Role::Ops => ResourceScope::All,
            Role::Pm => {
                let managed_project_ids = self.managed_project_ids(user.id()).await?;
                ResourceScope::Filtered(FieldFilter::is_in(
                    fields.project.name(),
                    managed_project_ids,
                ))
            }
            Role::Client => {
                ResourceScope::Filtered(FieldFilter::equals(fields.client.name(), user.id()))
            }
            Role::Coach => {
                ResourceScope::Filtered(FieldFilter::equals(fields.coach.name(), user.id()))
            }
            Role::Unrecognized(_) => ResourceScope::Denied,
        };

        Ok(scope)
    }

    async fn managed_project_ids(&self, user_id: UserId) -> AppResult<Vec<ProjectId>> {
        Ok(self
            .project_repository
            .list_projects_managed_by(user_id)
            .await?
            .iter()
            .map(Project::id)
            .collect())
    }
}
