//! Ad resource HTTP service.
//!
//! Exposes create, list, get-by-id and record-interaction endpoints for an
//! "ad" resource. Reads are served from fixed fake records rebuilt on every
//! request; writes are decoded, logged and acknowledged, never stored.
//!
//! ```text
//! POST /ad              -> "Post received: <description>"
//! GET  /ad              -> [ad 1111, ad 2222]
//! GET  /ad/{id}         -> ad 2222 with features.id = {id}
//! POST /ad/interaction  -> "interaction received: <action>"
//! ```
//!
//! # Modules
//!
//! - [`ads`]: Ad types and fake records
//! - [`api`]: HTTP handlers, routes and OpenAPI document
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod ads;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
