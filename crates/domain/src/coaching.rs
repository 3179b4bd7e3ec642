use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoachingId, ProjectId, RelationshipFields, UserId};

/// A coaching relationship between one client and one coach within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coaching {
    id: CoachingId,
    client_id: UserId,
    coach_id: UserId,
    project_id: ProjectId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Coaching {
    /// Creates a coaching with a fresh identity stamped with the current time.
    #[must_use]
    pub fn new(client_id: UserId, coach_id: UserId, project_id: ProjectId) -> Self {
        let now = Utc::now();
        Self::from_parts(CoachingId::new(), client_id, coach_id, project_id, now, now)
    }

    /// Rebuilds a coaching from stored values.
    #[must_use]
    pub fn from_parts(
        id: CoachingId,
        client_id: UserId,
        coach_id: UserId,
        project_id: ProjectId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            client_id,
            coach_id,
            project_id,
            created_at,
            updated_at,
        }
    }

    /// Storage field selectors for coaching records.
    #[must_use]
    pub fn relationship_fields() -> RelationshipFields<Self> {
        RelationshipFields::with_default_names(
            |coaching: &Self| Some(coaching.client_id),
            |coaching: &Self| Some(coaching.coach_id),
            |coaching: &Self| Some(coaching.project_id),
        )
    }

    /// Returns the coaching identity.
    #[must_use]
    pub fn id(&self) -> CoachingId {
        self.id
    }

    /// Returns the client receiving the coaching.
    #[must_use]
    pub fn client_id(&self) -> UserId {
        self.client_id
    }

    /// Returns the coach delivering the coaching.
    #[must_use]
    pub fn coach_id(&self) -> UserId {
        self.coach_id
    }

    /// Returns the project the coaching belongs to.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
