use axum::Json;
use axum::extract::{Extension, State};
use coachhub_domain::User;

use crate::dto::ProjectResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = state
        .project_service
        .list_projects(&user)
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(projects))
}
