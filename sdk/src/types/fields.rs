//! Field decoding helpers for store payloads.
//!
//! The store API signals "nothing here" in several ways (`null`, `false`,
//! `""`, `"0"`, `0`, `[]`). These helpers fold all of them into an explicit
//! absent value so callers deal with `Option` and `bool` only.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Returns true if the value is one of the API's "empty" markers.
///
/// Objects always count as present, even without keys.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

/// Returns true if an identifier is unset by the API's rules (`""` or `"0"`).
#[must_use]
pub fn is_blank_id(id: &str) -> bool {
    id.is_empty() || id == "0"
}

/// Decodes a nested object, treating blank markers as absent.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// Decodes a flag from any JSON scalar.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(!is_blank(&value))
}

/// Decodes an identifier that may arrive as a string or a number.
pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Decodes a list, treating blank markers as an empty list.
pub(crate) fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(Vec::new());
    }
    Vec::<T>::deserialize(value).map_err(D::Error::custom)
}
