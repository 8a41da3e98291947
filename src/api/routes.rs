//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::docs::openapi;
use super::handlers::{
    create_ad, get_ad, get_interaction_ad, health, list_ads, record_interaction, render_metrics,
    AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Ad endpoints
        .route("/ad", post(create_ad).get(list_ads))
        .route(
            "/ad/interaction",
            post(record_interaction).get(get_interaction_ad),
        )
        .route("/ad/:id", get(get_ad))
        // Operational endpoints
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
