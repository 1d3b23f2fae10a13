//! Cart types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{identifier, truthy};

/// A cart as returned by `cart/{cartid}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart identifier.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub cartid: Option<String>,

    /// True while the cart awaits payment confirmation.
    #[serde(default, deserialize_with = "truthy")]
    pub pending: bool,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    /// Returns a raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
