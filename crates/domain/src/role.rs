use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Access class assigned to a user.
///
/// Stored roles are free-form strings. Anything outside the four known values
/// is kept as [`Role::Unrecognized`] and grants no access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Operations staff with unrestricted read access.
    Ops,
    /// Project manager scoped to the projects listing them as manager.
    Pm,
    /// Client scoped to their own coachings.
    Client,
    /// Coach scoped to the coachings they deliver.
    Coach,
    /// Any other stored value, carried verbatim.
    Unrecognized(String),
}

impl Role {
    /// Parses a stored role value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "ops" => Self::Ops,
            "pm" => Self::Pm,
            "client" => Self::Client,
            "coach" => Self::Coach,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Returns the stored value for this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ops => "ops",
            Self::Pm => "pm",
            Self::Client => "client",
            Self::Coach => "coach",
            Self::Unrecognized(value) => value.as_str(),
        }
    }

    /// Returns whether the role is one of the four known access classes.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Unrecognized(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
