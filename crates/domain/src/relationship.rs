//! Relationship field selectors for access-scoped resources.
//!
//! A resource kind participates in role scoping by naming which of its fields
//! holds the client, the coach and the owning project. The name is what the
//! store filters on; the reader extracts the same value from a loaded record.

use crate::{ProjectId, UserId};

/// One relationship attribute of a resource kind.
pub struct RelationshipField<R, I> {
    name: &'static str,
    read: fn(&R) -> Option<I>,
}

impl<R, I> RelationshipField<R, I> {
    /// Creates a selector from the storage field name and a record reader.
    #[must_use]
    pub const fn new(name: &'static str, read: fn(&R) -> Option<I>) -> Self {
        Self { name, read }
    }

    /// Returns the storage field name used in store filters.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the identity from a record. `None` never matches any caller.
    #[must_use]
    pub fn read(&self, record: &R) -> Option<I> {
        (self.read)(record)
    }

    /// Returns a selector reading the same value under another storage name.
    #[must_use]
    pub fn renamed(self, name: &'static str) -> Self {
        Self { name, ..self }
    }
}

impl<R, I> Clone for RelationshipField<R, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, I> Copy for RelationshipField<R, I> {}

impl<R, I> std::fmt::Debug for RelationshipField<R, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RelationshipField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The client, coach and project selectors of one resource kind.
pub struct RelationshipFields<R> {
    /// Field holding the client participant.
    pub client: RelationshipField<R, UserId>,
    /// Field holding the coach participant.
    pub coach: RelationshipField<R, UserId>,
    /// Field holding the owning project.
    pub project: RelationshipField<R, ProjectId>,
}

impl<R> RelationshipFields<R> {
    /// Default storage name of the client field.
    pub const DEFAULT_CLIENT_FIELD: &'static str = "clientId";
    /// Default storage name of the coach field.
    pub const DEFAULT_COACH_FIELD: &'static str = "coachId";
    /// Default storage name of the project field.
    pub const DEFAULT_PROJECT_FIELD: &'static str = "projectId";

    /// Groups the three selectors of a resource kind.
    #[must_use]
    pub const fn new(
        client: RelationshipField<R, UserId>,
        coach: RelationshipField<R, UserId>,
        project: RelationshipField<R, ProjectId>,
    ) -> Self {
        Self {
            client,
            coach,
            project,
        }
    }

    /// Builds selectors under the default field names.
    #[must_use]
    pub const fn with_default_names(
        client: fn(&R) -> Option<UserId>,
        coach: fn(&R) -> Option<UserId>,
        project: fn(&R) -> Option<ProjectId>,
    ) -> Self {
        Self::new(
            RelationshipField::new(Self::DEFAULT_CLIENT_FIELD, client),
            RelationshipField::new(Self::DEFAULT_COACH_FIELD, coach),
            RelationshipField::new(Self::DEFAULT_PROJECT_FIELD, project),
        )
    }
}

impl<R> Clone for RelationshipFields<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RelationshipFields<R> {}

impl<R> std::fmt::Debug for RelationshipFields<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RelationshipFields")
            .field("client", &self.client)
            .field("coach", &self.coach)
            .field("project", &self.project)
            .finish()
    }
}
