//! API router configuration.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::handlers;
use crate::state::AppState;

/// Create the main API router.
pub fn create_router(state: AppState, config: &ServiceConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/chat", post(handlers::chat))
        .route("/sessions/:id", delete(handlers::end_session))
        .route("/feedback", post(handlers::feedback));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
