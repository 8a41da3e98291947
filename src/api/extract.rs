//! Request body decoding.
//!
//! Bodies are decoded as the first JSON value they contain. Anything after
//! that value is ignored and the request `Content-Type` is never checked.
//!
//! The value must be an object or `null`. A `null` body decodes to the
//! default value. Object keys match field names case-insensitively, and a
//! `null` field counts as missing. When two keys fold to the same field the
//! later one wins.

use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ApiError;
use crate::metrics;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Lowercase top-level keys and skip `null` fields.
fn fold_fields(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(fields.len());
    for (key, value) in fields {
        if !value.is_null() {
            folded.insert(key.to_lowercase(), value);
        }
    }
    folded
}

/// Decode the first JSON value in `body`.
pub fn decode_first<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, serde_json::Error> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("EOF while parsing request body")))?;

    match value {
        Value::Null => Ok(T::default()),
        Value::Object(fields) => T::deserialize(Value::Object(fold_fields(fields))),
        other => Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

/// Decode a request body for `route`, logging and counting failures.
pub fn decode_body<T: DeserializeOwned + Default>(
    route: &'static str,
    body: &[u8],
) -> Result<T, ApiError> {
    decode_first(body).map_err(|e| {
        warn!(route, "Failed to parse JSON input {}", e);
        metrics::inc_decode_failures(route);
        ApiError::Decode(e)
    })
}
