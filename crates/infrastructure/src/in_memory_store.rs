use async_trait::async_trait;
use coachhub_application::{
    CoachingRepository, FieldFilter, ProjectRepository, ResourceRepository, UserRepository,
};
use coachhub_core::AppResult;
use coachhub_domain::{Coaching, Project, ProjectId, User, UserId};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::coaching_fields::CoachingField;

/// In-memory store implementing every repository port.
///
/// Records keep insertion order; saving an existing identity replaces it in
/// place.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    projects: RwLock<Vec<Project>>,
    coachings: RwLock<Vec<Coaching>>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn upsert<T>(records: &mut Vec<T>, record: T, same: impl Fn(&T, &T) -> bool) {
    match records.iter_mut().find(|existing| same(existing, &record)) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id() == user_id)
            .cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn save_user(&self, user: User) -> AppResult<()> {
        upsert(&mut *self.users.write().await, user, |left, right| {
            left.id() == right.id()
        });
        Ok(())
    }

    async fn delete_all_users(&self) -> AppResult<()> {
        self.users.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn list_projects_managed_by(&self, user_id: UserId) -> AppResult<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|project| project.is_managed_by(user_id))
            .cloned()
            .collect())
    }

    async fn list_projects_by_ids(&self, project_ids: &[ProjectId]) -> AppResult<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|project| project_ids.contains(&project.id()))
            .cloned()
            .collect())
    }

    async fn save_project(&self, project: Project) -> AppResult<()> {
        upsert(&mut *self.projects.write().await, project, |left, right| {
            left.id() == right.id()
        });
        Ok(())
    }

    async fn delete_all_projects(&self) -> AppResult<()> {
        self.projects.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl ResourceRepository<Coaching> for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Coaching>> {
        Ok(self.coachings.read().await.clone())
    }

    async fn find_where(&self, filter: FieldFilter) -> AppResult<Vec<Coaching>> {
        let field = CoachingField::parse(filter.field)?;

        Ok(self
            .coachings
            .read()
            .await
            .iter()
            .filter(|coaching| filter.matches(Some(field.read(coaching))))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Coaching>> {
        Ok(self
            .coachings
            .read()
            .await
            .iter()
            .find(|coaching| coaching.id().as_uuid() == id)
            .cloned())
    }
}

#[async_trait]
impl CoachingRepository for InMemoryStore {
    async fn save_coaching(&self, coaching: Coaching) -> AppResult<()> {
        upsert(&mut *self.coachings.write().await, coaching, |left, right| {
            left.id() == right.id()
        });
        Ok(())
    }

    async fn delete_all_coachings(&self) -> AppResult<()> {
        self.coachings.write().await.clear();
        Ok(())
    }
}
