//! HTTP API module for the ad endpoints plus health, metrics and docs.

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
