use coachhub_application::UserService;
use coachhub_core::AppResult;
use coachhub_domain::{Coaching, Project, ProjectId, Role, User, UserId};
use tracing::info;

use crate::api_services::RepositorySet;

const CLIENTS: [(&str, &str); 6] = [
    ("Bambi", "Deer"),
    ("Tiny", "Tim"),
    ("Oliver", "Twist"),
    ("Cindy", "Princess"),
    ("Dorothy", "Gale"),
    ("Alice", "Wonderland"),
];

const COACHES: [(&str, &str); 4] = [
    ("Sherlock", "Holmes"),
    ("Hercule", "Poirot"),
    ("Clarice", "Starling"),
    ("Jim", "Gordon"),
];

const PROJECT_MANAGERS: [(&str, &str); 3] = [
    ("Tony", "Stark"),
    ("Steve", "Rogers"),
    ("Natasha", "Romanoff"),
];

const OPERATIONS: [(&str, &str); 3] = [
    ("Gandalf", "the Grey"),
    ("Merlin", "of Camelot"),
    ("Albus", "Dumbledore"),
];

/// Manager positions per project: (pm indexes, ops indexes).
const PROJECTS: [(&[usize], &[usize]); 5] = [
    (&[0], &[0]),
    (&[1], &[]),
    (&[2], &[1, 2]),
    (&[0, 1], &[]),
    (&[], &[0]),
];

/// Coachings as (client index, coach index, project index).
const COACHINGS: [(usize, usize, usize); 7] = [
    (0, 0, 0),
    (1, 0, 0),
    (2, 1, 1),
    (3, 2, 2),
    (4, 3, 3),
    (0, 1, 4),
    (2, 3, 2),
];

/// Record counts written by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub projects: usize,
    pub coachings: usize,
}

/// Replaces the stored users, projects and coachings with the development
/// fixture.
pub async fn seed(repositories: &RepositorySet) -> AppResult<SeedSummary> {
    repositories.coaching_repository.delete_all_coachings().await?;
    repositories.project_repository.delete_all_projects().await?;
    repositories.user_repository.delete_all_users().await?;
    info!("cleared users, projects and coachings");

    let clients = save_users(repositories, Role::Client, &CLIENTS).await?;
    let coaches = save_users(repositories, Role::Coach, &COACHES).await?;
    let pms = save_users(repositories, Role::Pm, &PROJECT_MANAGERS).await?;
    let ops = save_users(repositories, Role::Ops, &OPERATIONS).await?;
    let user_count = clients.len() + coaches.len() + pms.len() + ops.len();

    let mut project_ids: Vec<ProjectId> = Vec::with_capacity(PROJECTS.len());
    for (pm_indexes, ops_indexes) in PROJECTS {
        let manager_ids = pm_indexes
            .iter()
            .map(|index| pms[*index])
            .chain(ops_indexes.iter().map(|index| ops[*index]))
            .collect();
        let project = Project::new(manager_ids);
        project_ids.push(project.id());
        repositories.project_repository.save_project(project).await?;
    }

    for (client_index, coach_index, project_index) in COACHINGS {
        let coaching = Coaching::new(
            clients[client_index],
            coaches[coach_index],
            project_ids[project_index],
        );
        repositories
            .coaching_repository
            .save_coaching(coaching)
            .await?;
    }

    let summary = SeedSummary {
        users: user_count,
        projects: project_ids.len(),
        coachings: COACHINGS.len(),
    };
    info!(
        users = summary.users,
        projects = summary.projects,
        coachings = summary.coachings,
        "development fixture seeded"
    );

    Ok(summary)
}

async fn save_users(
    repositories: &RepositorySet,
    role: Role,
    names: &[(&str, &str)],
) -> AppResult<Vec<UserId>> {
    let mut user_ids = Vec::with_capacity(names.len());
    for (first_name, last_name) in names {
        let user = User::new(role.clone(), *first_name, Some((*last_name).to_owned()))?;
        user_ids.push(user.id());
        repositories.user_repository.save_user(user).await?;
    }

    Ok(user_ids)
}

/// Logs every stored user with identity, role and name.
pub async fn list_users(user_service: &UserService) -> AppResult<usize> {
    let users = user_service.list_users().await?;
    for user in &users {
        info!(
            user_id = %user.id(),
            role = %user.role(),
            name = %user.display_name(),
            "user"
        );
    }

    info!(count = users.len(), "listed users");
    Ok(users.len())
}
