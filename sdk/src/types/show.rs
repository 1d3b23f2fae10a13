//! Show and seatmap types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::identifier;

/// A show (a dated performance) of an edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Show identifier.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Show {
    /// Returns a raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A seatmap, either scoped to a show or as standalone details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seatmap {
    /// Seatmap identifier.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Seatmap {
    /// Returns a raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
