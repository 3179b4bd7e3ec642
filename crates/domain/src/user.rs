//! User domain types.

use coachhub_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// A person known to the system together with their access class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    role: Role,
    first_name: NonEmptyString,
    last_name: Option<String>,
}

impl User {
    /// Creates a new user with a fresh identity.
    pub fn new(
        role: Role,
        first_name: impl Into<String>,
        last_name: Option<String>,
    ) -> AppResult<Self> {
        Self::from_parts(UserId::new(), role, first_name, last_name)
    }

    /// Rebuilds a user from stored values.
    pub fn from_parts(
        id: UserId,
        role: Role,
        first_name: impl Into<String>,
        last_name: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            role,
            first_name: NonEmptyString::new(first_name)?,
            last_name: last_name.filter(|value| !value.trim().is_empty()),
        })
    }

    /// Returns the user identity.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's access class.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the last name, if one was recorded.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Returns first and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.last_name() {
            Some(last_name) => format!("{} {last_name}", self.first_name()),
            None => self.first_name().to_owned(),
        }
    }
}
