use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use coachhub_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{self, USER_ID_HEADER};
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route(
            "/coachings",
            get(handlers::coachings::list_coachings_handler),
        )
        .route(
            "/coachings/{coaching_id}",
            get(handlers::coachings::get_coaching_handler),
        )
        .route("/projects", get(handlers::projects::list_projects_handler))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_user,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    Ok(Router::new()
        .route("/", get(handlers::hello::hello_handler))
        .route("/hello", get(handlers::hello::hello_handler))
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}

#[cfg(test)]
mod tests;
