//! Ad resource module.
//!
//! This module handles:
//! - Ad, features, interaction and request types
//! - The fixed fake records served by the read endpoints

pub mod fake;
pub mod types;

pub use fake::{ad_with_id, list_ads};
pub use types::{Action, Ad, Features, Interaction, InteractionRequest};
