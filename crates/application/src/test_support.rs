//! In-crate test doubles for the repository ports.

use async_trait::async_trait;
use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Coaching, Project, ProjectId, User, UserId};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    CoachingRepository, FieldFilter, ProjectRepository, ResourceRepository, UserRepository,
};

/// Query issued against a resource double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResourceCall {
    FindAll,
    FindWhere(FieldFilter),
    FindById(Uuid),
}

/// Resource double that evaluates filters through a field reader.
pub(crate) struct FakeResourceRepository<R> {
    records: Mutex<Vec<R>>,
    id_of: fn(&R) -> Uuid,
    field_of: fn(&R, &str) -> Option<Uuid>,
    failure: Option<String>,
    pub(crate) calls: Mutex<Vec<ResourceCall>>,
}

impl<R> FakeResourceRepository<R> {
    pub(crate) fn new(
        records: Vec<R>,
        id_of: fn(&R) -> Uuid,
        field_of: fn(&R, &str) -> Option<Uuid>,
    ) -> Self {
        Self {
            records: Mutex::new(records),
            id_of,
            field_of,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    pub(crate) async fn recorded_calls(&self) -> Vec<ResourceCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: ResourceCall) -> AppResult<()> {
        self.calls.lock().await.push(call);
        match &self.failure {
            Some(message) => Err(AppError::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

impl FakeResourceRepository<Coaching> {
    pub(crate) fn coachings(records: Vec<Coaching>) -> Self {
        Self::new(records, coaching_id, coaching_field)
    }
}

fn coaching_id(coaching: &Coaching) -> Uuid {
    coaching.id().as_uuid()
}

fn coaching_field(coaching: &Coaching, field: &str) -> Option<Uuid> {
    match field {
        "clientId" => Some(coaching.client_id().as_uuid()),
        "coachId" => Some(coaching.coach_id().as_uuid()),
        "projectId" => Some(coaching.project_id().as_uuid()),
        _ => None,
    }
}

#[async_trait]
impl<R> ResourceRepository<R> for FakeResourceRepository<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> AppResult<Vec<R>> {
        self.record(ResourceCall::FindAll).await?;
        Ok(self.records.lock().await.clone())
    }

    async fn find_where(&self, filter: FieldFilter) -> AppResult<Vec<R>> {
        self.record(ResourceCall::FindWhere(filter.clone())).await?;
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .filter(|record| filter.matches((self.field_of)(record, filter.field)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<R>> {
        self.record(ResourceCall::FindById(id)).await?;
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .find(|record| (self.id_of)(record) == id)
            .cloned())
    }
}

#[async_trait]
impl CoachingRepository for FakeResourceRepository<Coaching> {
    async fn save_coaching(&self, coaching: Coaching) -> AppResult<()> {
        let mut records = self.records.lock().await;
        records.retain(|existing| existing.id() != coaching.id());
        records.push(coaching);
        Ok(())
    }

    async fn delete_all_coachings(&self) -> AppResult<()> {
        self.records.lock().await.clear();
        Ok(())
    }
}

/// Query issued against the project double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProjectCall {
    ListAll,
    ManagedBy(UserId),
    ByIds(Vec<ProjectId>),
}

#[derive(Default)]
pub(crate) struct FakeProjectRepository {
    projects: Mutex<Vec<Project>>,
    failure: Option<String>,
    pub(crate) calls: Mutex<Vec<ProjectCall>>,
}

impl FakeProjectRepository {
    pub(crate) fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every list query is recorded, then fails with `Internal(message)`.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub(crate) async fn recorded_calls(&self) -> Vec<ProjectCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: ProjectCall) -> AppResult<()> {
        self.calls.lock().await.push(call);
        match &self.failure {
            Some(message) => Err(AppError::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProjectRepository for FakeProjectRepository {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.record(ProjectCall::ListAll).await?;
        Ok(self.projects.lock().await.clone())
    }

    async fn list_projects_managed_by(&self, user_id: UserId) -> AppResult<Vec<Project>> {
        self.record(ProjectCall::ManagedBy(user_id)).await?;
        Ok(self
            .projects
            .lock()
            .await
            .iter()
            .filter(|project| project.is_managed_by(user_id))
            .cloned()
            .collect())
    }

    async fn list_projects_by_ids(&self, project_ids: &[ProjectId]) -> AppResult<Vec<Project>> {
        self.record(ProjectCall::ByIds(project_ids.to_vec()))
            .await?;
        Ok(self
            .projects
            .lock()
            .await
            .iter()
            .filter(|project| project_ids.contains(&project.id()))
            .cloned()
            .collect())
    }

    async fn save_project(&self, project: Project) -> AppResult<()> {
        self.projects.lock().await.push(project);
        Ok(())
    }

    async fn delete_all_projects(&self) -> AppResult<()> {
        self.projects.lock().await.clear();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    users: Mutex<Vec<User>>,
    failure: Option<String>,
}

impl FakeUserRepository {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            failure: None,
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            failure: Some(message.to_owned()),
        }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        if let Some(message) = &self.failure {
            return Err(AppError::Internal(message.clone()));
        }

        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.id() == user_id)
            .cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().await.clone())
    }

    async fn save_user(&self, user: User) -> AppResult<()> {
        self.users.lock().await.push(user);
        Ok(())
    }

    async fn delete_all_users(&self) -> AppResult<()> {
        self.users.lock().await.clear();
        Ok(())
    }
}

pub(crate) fn user_with_role(role: &str) -> User {
    User::new(role.into(), "Test", Some("User".to_owned())).unwrap_or_else(|_| unreachable!())
}
