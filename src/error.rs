//! Unified error types for the ad service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Message returned for any request body that fails to decode.
pub const DECODE_ERROR_MESSAGE: &str = "Failed to parse JSON input";

/// Errors raised while handling a single HTTP request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is not valid JSON of the expected shape.
    #[error("Failed to parse JSON input")]
    Decode(#[source] serde_json::Error),

    /// Response value could not be serialized.
    #[error("Failed to parse {what} to JSON {source}")]
    Encode {
        /// What was being serialized, e.g. "ad object".
        what: &'static str,
        /// Underlying serializer error.
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Encode { .. } = &self {
            error!("{}", self);
        }
        // Plain text, newline terminated.
        (self.status(), format!("{self}\n")).into_response()
    }
}

/// Errors raised while starting the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
