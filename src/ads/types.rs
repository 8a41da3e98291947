//! Ad resource types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;
use utoipa::ToSchema;

/// Identity record for an ad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Features {
    /// Opaque ad identifier.
    pub id: String,
    /// Human readable description.
    pub description: String,
    /// Landing page.
    pub url: String,
    /// Creative image location.
    pub image_url: String,
}

/// Engagement counters for an ad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Interaction {
    /// Number of views.
    pub view: u64,
    /// Number of clicks.
    pub click: u64,
}

/// An ad: identity, weighted tags and interaction counters.
///
/// Tags are kept in a `BTreeMap` so that serialization is stable across
/// requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ad {
    pub features: Features,
    pub tags: BTreeMap<String, f64>,
    pub interaction: Interaction,
}

/// Kind of user engagement reported through the interaction endpoint.
///
/// Decoding is lenient: any string that is not a known action is kept
/// verbatim in [`Action::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    #[strum(serialize = "click")]
    Click,
    #[strum(serialize = "view")]
    View,
    #[strum(default)]
    Other(String),
}

impl Action {
    /// Wire representation of the action.
    pub fn as_str(&self) -> &str {
        match self {
            Action::Click => "click",
            Action::View => "view",
            Action::Other(raw) => raw,
        }
    }

    /// Whether this is one of the declared actions.
    pub fn is_known(&self) -> bool {
        !matches!(self, Action::Other(_))
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Other(String::new())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Action {
    fn from(raw: String) -> Self {
        Action::from_str(&raw).unwrap_or(Action::Other(raw))
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Body of `POST /ad/interaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InteractionRequest {
    /// Target ad.
    pub id: String,
    /// Reported action, normally `click` or `view`.
    #[schema(value_type = String, example = "click")]
    pub action: Action,
}
