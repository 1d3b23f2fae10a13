//! Edition and channel types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{identifier, is_blank_id, present};

/// Queue position attached to a loaded edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueRef {
    /// Queue identifier to send back on the next load.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub queueid: Option<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueueRef {
    /// Returns the queue id unless it is unset, `""` or `"0"`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.queueid.as_deref().filter(|id| !is_blank_id(id))
    }
}

/// Cart reference attached to a loaded edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartRef {
    /// Cart identifier.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub cartid: Option<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartRef {
    /// Returns the cart id unless it is unset, `""` or `"0"`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.cartid.as_deref().filter(|id| !is_blank_id(id))
    }
}

/// An edition as returned by `store/{event}/{edition}[/{channel}]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// Path segment identifying the edition in store URIs.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Waiting-room state, absent when the visitor is not queued.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueRef>,

    /// Cart reference, absent until a cart exists.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartRef>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edition {
    /// Returns the nested queue id, if any.
    #[must_use]
    pub fn queue_id(&self) -> Option<&str> {
        self.queue.as_ref().and_then(QueueRef::id)
    }

    /// Returns the nested cart id, if any.
    #[must_use]
    pub fn cart_id(&self) -> Option<&str> {
        self.cart.as_ref().and_then(CartRef::id)
    }

    /// Returns a raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A sales channel of an edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Path segment identifying the channel in store URIs.
    #[serde(default, deserialize_with = "identifier", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Remaining payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Channel {
    /// Creates a channel addressed by the given URI segment.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            extra: Map::new(),
        }
    }
}
