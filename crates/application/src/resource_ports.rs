use async_trait::async_trait;
use coachhub_core::AppResult;
use coachhub_domain::{Coaching, Project, ProjectId, User, UserId};
use uuid::Uuid;

/// Value test applied to one stored field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatch {
    /// Field equals the identity exactly.
    Equals(Uuid),
    /// Field equals one of the identities. An empty set matches nothing.
    In(Vec<Uuid>),
}

/// Exact-match filter over one field of a resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    /// Storage field name.
    pub field: &'static str,
    /// Value test applied to the field.
    pub matcher: FieldMatch,
}

impl FieldFilter {
    /// Builds an equality filter.
    #[must_use]
    pub fn equals(field: &'static str, value: impl Into<Uuid>) -> Self {
        Self {
            field,
            matcher: FieldMatch::Equals(value.into()),
        }
    }

    /// Builds a membership filter.
    #[must_use]
    pub fn is_in<I, V>(field: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Uuid>,
    {
        Self {
            field,
            matcher: FieldMatch::In(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Evaluates the filter against a field value read from a record.
    #[must_use]
    pub fn matches(&self, value: Option<Uuid>) -> bool {
        let Some(value) = value else {
            return false;
        };

        match &self.matcher {
            FieldMatch::Equals(expected) => *expected == value,
            FieldMatch::In(expected) => expected.contains(&value),
        }
    }
}

/// Read-only store capability over one resource kind.
#[async_trait]
pub trait ResourceRepository<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    /// Returns every record.
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// Returns the records matching the filter.
    async fn find_where(&self, filter: FieldFilter) -> AppResult<Vec<R>>;

    /// Returns one record by identity.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<R>>;
}

/// Repository port for coaching records.
#[async_trait]
pub trait CoachingRepository: ResourceRepository<Coaching> {
    /// Inserts or replaces a coaching.
    async fn save_coaching(&self, coaching: Coaching) -> AppResult<()>;

    /// Removes every coaching.
    async fn delete_all_coachings(&self) -> AppResult<()>;
}

/// Repository port for projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project.
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Returns the projects listing the user as a manager.
    async fn list_projects_managed_by(&self, user_id: UserId) -> AppResult<Vec<Project>>;

    /// Returns the projects with the given identities.
    async fn list_projects_by_ids(&self, project_ids: &[ProjectId]) -> AppResult<Vec<Project>>;

    /// Inserts or replaces a project.
    async fn save_project(&self, project: Project) -> AppResult<()>;

    /// Removes every project.
    async fn delete_all_projects(&self) -> AppResult<()>;
}

/// Repository port for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds one user by identity.
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Returns every user.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Inserts or replaces a user.
    async fn save_user(&self, user: User) -> AppResult<()>;

    /// Removes every user.
    async fn delete_all_users(&self) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use coachhub_domain::{ProjectId, UserId};

    use super::FieldFilter;

    #[test]
    fn empty_membership_filter_matches_nothing() {
        let filter = FieldFilter::is_in("projectId", Vec::<ProjectId>::new());
        assert!(!filter.matches(Some(ProjectId::new().as_uuid())));
    }

    #[test]
    fn missing_field_never_matches() {
        let filter = FieldFilter::equals("clientId", UserId::new());
        assert!(!filter.matches(None));
    }

    #[test]
    fn equality_filter_matches_exact_identity() {
        let user_id = UserId::new();
        let filter = FieldFilter::equals("clientId", user_id);
        assert!(filter.matches(Some(user_id.as_uuid())));
        assert!(!filter.matches(Some(UserId::new().as_uuid())));
    }
}
