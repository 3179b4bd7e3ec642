use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use coachhub_core::AppError;
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the caller from the `X-User-Id` header and stores the user as a
/// request extension.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let raw_user_id = user_id_header(request.headers())?;
    let user = state.user_service.authenticate(raw_user_id).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Reads the raw header value. A present value that is not visible ASCII is a
/// malformed identity, not a missing one.
fn user_id_header(headers: &HeaderMap) -> Result<Option<&str>, AppError> {
    let Some(value) = headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    value.to_str().map(Some).map_err(|_| {
        warn!("rejected non-text user id header");
        AppError::Unauthorized("Invalid user ID format".to_owned())
    })
}
