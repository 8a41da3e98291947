//! HTTP API handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::info;

use super::extract::decode_body;
use crate::ads::{self, Ad, Features, InteractionRequest};
use crate::error::ApiError;
use crate::metrics;

/// Route label for `POST /ad`.
pub const ROUTE_CREATE_AD: &str = "create_ad";
/// Route label for `GET /ad`.
pub const ROUTE_LIST_ADS: &str = "list_ads";
/// Route label for `GET /ad/{id}`.
pub const ROUTE_GET_AD: &str = "get_ad";
/// Route label for `POST /ad/interaction`.
pub const ROUTE_INTERACTION: &str = "record_interaction";

/// Application state shared with handlers.
///
/// Holds no ad data. Every ad handler builds its response from scratch.
#[derive(Clone, Default)]
pub struct AppState {
    /// Render handle of the installed Prometheus recorder, if any.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state without a metrics recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create app state that serves the given recorder on `/metrics`.
    pub fn with_metrics(handle: PrometheusHandle) -> Self {
        Self {
            metrics: Some(handle),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Serialize `value` as a JSON response, naming it `what` on failure.
fn encode_json<T: Serialize>(what: &'static str, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|source| ApiError::Encode { what, source })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn respond_with_ad(id: String) -> Result<Response, ApiError> {
    info!(ad_id = %id, "Looking up ad");
    let ad: Ad = ads::ad_with_id(id);
    encode_json("ad object", &ad)
}

/// Accept an ad post. The decoded features are not stored.
#[utoipa::path(
    post,
    path = "/ad",
    tag = "ads",
    request_body = Features,
    responses(
        (status = 200, description = "Post acknowledged", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain")
    )
)]
pub async fn create_ad(body: Bytes) -> Result<String, ApiError> {
    let _timer = metrics::track_request(ROUTE_CREATE_AD);
    let features: Features = decode_body(ROUTE_CREATE_AD, &body)?;
    info!(description = %features.description, "Post received");

    Ok(format!("Post received: {}\n", features.description))
}

/// List the fixed fake ads.
#[utoipa::path(
    get,
    path = "/ad",
    tag = "ads",
    responses(
        (status = 200, description = "The fake ads", body = [Ad]),
        (status = 500, description = "Serialization failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_ads() -> Result<Response, ApiError> {
    let _timer = metrics::track_request(ROUTE_LIST_ADS);
    info!("Listing ads");

    encode_json("ad objects", &ads::list_ads())
}

/// Return a synthetic ad carrying the requested id.
#[utoipa::path(
    get,
    path = "/ad/{id}",
    tag = "ads",
    params(("id" = String, Path, description = "Ad id, echoed back as features.id")),
    responses(
        (status = 200, description = "A fake ad with the requested id", body = Ad),
        (status = 500, description = "Serialization failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_ad(Path(id): Path<String>) -> Result<Response, ApiError> {
    let _timer = metrics::track_request(ROUTE_GET_AD);
    respond_with_ad(id)
}

/// `GET /ad/interaction`: the literal segment is looked up as an ad id.
pub async fn get_interaction_ad() -> Result<Response, ApiError> {
    let _timer = metrics::track_request(ROUTE_GET_AD);
    respond_with_ad("interaction".to_string())
}

/// Acknowledge an interaction. Unknown actions are echoed, not rejected.
#[utoipa::path(
    post,
    path = "/ad/interaction",
    tag = "ads",
    request_body = InteractionRequest,
    responses(
        (status = 200, description = "Interaction acknowledged", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain")
    )
)]
pub async fn record_interaction(body: Bytes) -> Result<String, ApiError> {
    let _timer = metrics::track_request(ROUTE_INTERACTION);
    let req: InteractionRequest = decode_body(ROUTE_INTERACTION, &body)?;
    info!(ad_id = %req.id, action = %req.action, "Interaction received");
    metrics::inc_interactions(&req.action);

    Ok(format!("interaction received: {}\n", req.action))
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "ops",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus exposition of the service metrics. Empty without a recorder.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
