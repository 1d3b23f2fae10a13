//! SDK error types.
//!
//! Provides error types for store session operations.

use crate::client::ClientError;

/// SDK errors.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The transport failed or the service rejected the request.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A session value was read before the call that loads it.
    #[error("{0} not loaded")]
    NotLoaded(&'static str),

    /// A loaded payload lacks a field the operation needs.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Client(ClientError::from(err))
    }
}
