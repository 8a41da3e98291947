//! Fixed fake ad records served by the read endpoints.
//!
//! Records are rebuilt on every call. Nothing here is cached or shared, so
//! reads can never observe writes.

use std::collections::BTreeMap;

use super::types::{Ad, Features, Interaction};

const LANDING_URL: &str = "www.laioffer.com";

/// Id of the first listed ad.
pub const FIRST_AD_ID: &str = "1111";
/// Id of the second listed ad.
pub const SECOND_AD_ID: &str = "2222";

fn fake_tags() -> BTreeMap<String, f64> {
    BTreeMap::from([("foo".to_string(), 1.0), ("bar".to_string(), 2.0)])
}

fn image_url(image_id: &str) -> String {
    format!("{LANDING_URL}/Images/{image_id}")
}

/// The first fake ad.
pub fn first_ad() -> Ad {
    Ad {
        features: Features {
            id: FIRST_AD_ID.to_string(),
            description: "this is the first ad of laioffer".to_string(),
            url: LANDING_URL.to_string(),
            image_url: image_url(FIRST_AD_ID),
        },
        tags: fake_tags(),
        interaction: Interaction { view: 2, click: 1 },
    }
}

/// The second fake ad, also the template for lookups by id.
pub fn second_ad() -> Ad {
    Ad {
        features: Features {
            id: SECOND_AD_ID.to_string(),
            description: "this is the second ad of laioffer".to_string(),
            url: LANDING_URL.to_string(),
            image_url: image_url(SECOND_AD_ID),
        },
        tags: fake_tags(),
        interaction: Interaction { view: 1, click: 0 },
    }
}

/// Both fake ads, in listing order.
pub fn list_ads() -> Vec<Ad> {
    vec![first_ad(), second_ad()]
}

/// A synthetic ad for any id: the second fake ad with its id replaced.
pub fn ad_with_id(id: impl Into<String>) -> Ad {
    let mut ad = second_ad();
    ad.features.id = id.into();
    ad
}
