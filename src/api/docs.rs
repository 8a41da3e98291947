//! OpenAPI description of the HTTP API.

use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use crate::ads::{Ad, Features, Interaction, InteractionRequest};

/// OpenAPI document for the ad service.
#[derive(OpenApi)]
#[openapi(
    info(title = "ad-service", description = "Ad resource endpoints backed by fixed fake data"),
    paths(
        handlers::create_ad,
        handlers::list_ads,
        handlers::get_ad,
        handlers::record_interaction,
        handlers::health,
    ),
    components(schemas(Ad, Features, Interaction, InteractionRequest)),
    tags(
        (name = "ads", description = "Ad resource"),
        (name = "ops", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
