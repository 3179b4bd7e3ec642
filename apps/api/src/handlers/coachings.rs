use std::str::FromStr;

use axum::Json;
use axum::extract::{Extension, Path, State};
use coachhub_domain::{CoachingId, User};

use crate::dto::CoachingResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_coachings_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<CoachingResponse>>> {
    let coachings = state
        .coaching_service
        .list_coachings(&user)
        .await?
        .into_iter()
        .map(CoachingResponse::from)
        .collect();

    Ok(Json(coachings))
}

pub async fn get_coaching_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(coaching_id): Path<String>,
) -> ApiResult<Json<CoachingResponse>> {
    let coaching_id = CoachingId::from_str(coaching_id.as_str())?;
    let coaching = state
        .coaching_service
        .get_coaching(&user, coaching_id)
        .await?;

    Ok(Json(CoachingResponse::from(coaching)))
}
