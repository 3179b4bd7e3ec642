use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coachhub_core::AppError;
use serde::Serialize;
use tracing::error;
use ts_rs::TS;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    error: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.0 {
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            other => other.detail().to_owned(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
