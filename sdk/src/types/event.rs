//! Event types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::list_or_empty;

/// An event as returned by `store/{event}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Language codes the event is published in, default first.
    #[serde(default, deserialize_with = "list_or_empty")]
    pub languages: Vec<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Returns the event's default language.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    /// Returns a raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
