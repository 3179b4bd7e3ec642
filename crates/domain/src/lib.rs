//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod coaching;
mod identity;
mod project;
mod relationship;
mod role;
mod user;

pub use coaching::Coaching;
pub use identity::{CoachingId, ProjectId, UserId};
pub use project::Project;
pub use relationship::{RelationshipField, RelationshipFields};
pub use role::Role;
pub use user::User;
