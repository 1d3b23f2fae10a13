//! Transport capability.
//!
//! The store session never talks HTTP directly. It builds a relative path and
//! a flat parameter set and hands both to a [`Transport`], which owns the
//! connection, its default parameters and the error mapping.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ClientError;

/// HTTP method used for a store request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create or replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat, ordered key-value request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Merges an optional value over the current set.
    ///
    /// A present value overrides the key; an absent value removes it, so an
    /// unset session field never leaks a connection default of the same name.
    pub fn merge(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => {
                self.0.insert(key.to_string(), v.to_string());
            }
            None => {
                self.0.remove(key);
            }
        }
        self
    }

    /// Sets the parameter only when the value is present and non-empty.
    pub fn set_non_empty(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.0.insert(key.to_string(), v.to_string());
        }
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A connection to the store API.
///
/// Implementations send one request per call and return the decoded JSON
/// body. They do not retry; every failure is reported as a [`ClientError`].
pub trait Transport {
    /// Connection-wide default parameters merged into store requests.
    fn meta(&self) -> &Parameters;

    /// Sends a request to a path relative to the API root.
    fn send(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}
