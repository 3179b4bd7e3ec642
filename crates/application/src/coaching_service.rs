use std::sync::Arc;

use coachhub_core::{AppError, AppResult};
use coachhub_domain::{Coaching, CoachingId, User};

use crate::{AccessControlService, CoachingRepository};

/// Application service for coaching reads.
#[derive(Clone)]
pub struct CoachingService {
    access_control: AccessControlService,
    repository: Arc<dyn CoachingRepository>,
}

impl CoachingService {
    /// Creates the service from the resolver and the coaching store.
    #[must_use]
    pub fn new(
        access_control: AccessControlService,
        repository: Arc<dyn CoachingRepository>,
    ) -> Self {
        Self {
            access_control,
            repository,
        }
    }

    /// Lists the coachings visible to the user.
    ///
    /// Recognized roles always succeed, possibly with an empty list.
    pub async fn list_coachings(&self, user: &User) -> AppResult<Vec<Coaching>> {
        require_recognized_role(user)?;

        self.access_control
            .filtered_resources(
                user,
                &Coaching::relationship_fields(),
                self.repository.as_ref(),
            )
            .await
    }

    /// Returns one coaching if the user may see it.
    ///
    /// Absent and invisible records both report not found.
    pub async fn get_coaching(&self, user: &User, coaching_id: CoachingId) -> AppResult<Coaching> {
        require_recognized_role(user)?;

        self.access_control
            .accessible_resource(
                user,
                coaching_id.as_uuid(),
                &Coaching::relationship_fields(),
                self.repository.as_ref(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Coaching not found".to_owned()))
    }
}

fn require_recognized_role(user: &User) -> AppResult<()> {
    if user.role().is_recognized() {
        return Ok(());
    }

    Err(AppError::Forbidden("Forbidden".to_owned()))
}
