use coachhub_core::{AppError, AppResult};
use coachhub_domain::Coaching;
use uuid::Uuid;

/// Storage fields of a coaching that may appear in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoachingField {
    Id,
    ClientId,
    CoachId,
    ProjectId,
}

impl CoachingField {
    pub(crate) fn parse(field: &str) -> AppResult<Self> {
        match field {
            "id" => Ok(Self::Id),
            "clientId" => Ok(Self::ClientId),
            "coachId" => Ok(Self::CoachId),
            "projectId" => Ok(Self::ProjectId),
            other => Err(AppError::Validation(format!(
                "coachings cannot be filtered by field '{other}'"
            ))),
        }
    }

    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ClientId => "client_id",
            Self::CoachId => "coach_id",
            Self::ProjectId => "project_id",
        }
    }

    pub(crate) fn read(self, coaching: &Coaching) -> Uuid {
        match self {
            Self::Id => coaching.id().as_uuid(),
            Self::ClientId => coaching.client_id().as_uuid(),
            Self::CoachId => coaching.coach_id().as_uuid(),
            Self::ProjectId => coaching.project_id().as_uuid(),
        }
    }
}
