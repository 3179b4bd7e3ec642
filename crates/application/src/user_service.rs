//! Caller identification and user listing.
//!
//! The caller names themselves with a raw user id. Every failure collapses to
//! an unauthorized error with a short client-facing message.

use std::str::FromStr;
use std::sync::Arc;

use coachhub_core::{AppError, AppResult};
use coachhub_domain::{User, UserId};
use tracing::{error, warn};

use crate::UserRepository;

/// Application service resolving callers into users.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates the service over the user store.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a raw caller-supplied user id into a stored user.
    pub async fn authenticate(&self, raw_user_id: Option<&str>) -> AppResult<User> {
        let raw_user_id = raw_user_id
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                warn!("rejected request without user id header");
                AppError::Unauthorized("Missing X-User-Id header".to_owned())
            })?;

        let user_id = UserId::from_str(raw_user_id).map_err(|_| {
            warn!(raw_user_id, "rejected malformed user id");
            AppError::Unauthorized("Invalid user ID format".to_owned())
        })?;

        let user = self.repository.find_user(user_id).await.map_err(|source| {
            error!(%user_id, error = %source, "user lookup failed during authentication");
            AppError::Unauthorized("Authentication failed".to_owned())
        })?;

        user.ok_or_else(|| {
            warn!(%user_id, "rejected unknown user id");
            AppError::Unauthorized("Invalid user ID".to_owned())
        })
    }

    /// Lists every stored user.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.list_users().await
    }
}
