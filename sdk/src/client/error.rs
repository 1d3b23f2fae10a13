//! Transport error types.
//!
//! Every failure that happens after a request was built names the method and
//! store path it belongs to, so a failed `load` can be told apart from the
//! cart fetch that follows it.

use thiserror::Error;

use super::transport::Method;

/// Errors raised by a [`Transport`](super::Transport) or its configuration.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or its response could not be read.
    #[error("{method} {path}: request failed: {source}")]
    Request {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
        /// Underlying HTTP error.
        source: reqwest::Error,
    },

    /// No response arrived within the configured timeout.
    #[error("{method} {path}: timed out")]
    Timeout {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
    },

    /// The service answered `401`.
    #[error("{method} {path}: unauthorized")]
    Unauthorized {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
    },

    /// The service answered `404`.
    #[error("{method} {path}: not found")]
    NotFound {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
    },

    /// The service answered `429`.
    #[error("{method} {path}: rate limited{}", retry_hint(.retry_after))]
    RateLimited {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
        /// Seconds from the `Retry-After` header, when sent.
        retry_after: Option<u64>,
    },

    /// The service answered with any other non-success status.
    #[error("{method} {path}: [{code}] {message}")]
    Api {
        /// Request method.
        method: Method,
        /// Store path relative to the base URL.
        path: String,
        /// HTTP status code.
        status: u16,
        /// Error code from the body, or the status code.
        code: String,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// A response body is not the JSON shape the caller expects.
    #[error("invalid payload: {0}")]
    Deserialization(String),

    /// The client configuration or a request URL is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Wraps an HTTP error raised while sending `method path`.
    ///
    /// Timeouts get their own variant.
    pub(crate) fn request(method: Method, path: &str, source: reqwest::Error) -> Self {
        let path = path.to_string();
        if source.is_timeout() {
            Self::Timeout { method, path }
        } else {
            Self::Request {
                method,
                path,
                source,
            }
        }
    }

    /// Returns the store path of the failed request, if one was sent.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Request { path, .. }
            | Self::Timeout { path, .. }
            | Self::Unauthorized { path, .. }
            | Self::NotFound { path, .. }
            | Self::RateLimited { path, .. }
            | Self::Api { path, .. } => Some(path),
            Self::Build(_) | Self::Deserialization(_) | Self::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(", retry after {}s", secs))
        .unwrap_or_default()
}
