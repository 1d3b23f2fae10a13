//! HTTP client implementation.
//!
//! Provides the `reqwest`-backed [`Transport`] for the EventSquare store API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::ClientError;
use super::transport::{Method, Parameters, Transport};

/// API error response format.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

/// API error details.
#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    message: String,
}

/// HTTP client for the EventSquare store API.
#[derive(Debug, Clone)]
pub struct EventSquareClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl EventSquareClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref api_key) = config.api_key {
            let value = HeaderValue::from_str(api_key).map_err(|_| {
                ClientError::InvalidConfig("api_key is not a valid header value".to_string())
            })?;
            headers.insert("X-API-Key", value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { config, http })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Creates a new client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid configuration.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves a relative store path against the base URL.
    ///
    /// Query parameters are appended when given and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL cannot be parsed.
    pub fn url_for(&self, path: &str, query: Option<&Parameters>) -> Result<Url, ClientError> {
        let raw = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| {
            ClientError::InvalidConfig(format!("invalid request url {}: {}", raw, e))
        })?;

        if let Some(params) = query.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }

    /// Sends one request and decodes the response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> Result<Value, ClientError> {
        let request = match method {
            Method::Get => self.http.get(self.url_for(path, Some(params))?),
            Method::Delete => self.http.delete(self.url_for(path, Some(params))?),
            Method::Put => self.http.put(self.url_for(path, None)?).json(params),
        };

        debug!(%method, path, params = params.len(), "sending store request");

        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::request(method, path, e))?;
        let status = resp.status();

        if status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| ClientError::request(method, path, e))?;

            if body.trim().is_empty() {
                return Ok(Value::Null);
            }

            return serde_json::from_str(&body).map_err(ClientError::from);
        }

        warn!(%method, path, status = status.as_u16(), "store request rejected");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(ClientError::RateLimited {
                method,
                path: path.to_string(),
                retry_after,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                method,
                path: path.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized {
                method,
                path: path.to_string(),
            });
        }

        let body = resp.text().await.unwrap_or_default();
        Err(api_error(method, path, status, body))
    }
}

/// Builds an API error from a non-success response body.
fn api_error(method: Method, path: &str, status: StatusCode, body: String) -> ClientError {
    let (code, message) = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(resp) => (resp.error.code, resp.error.message),
        Err(_) => (status.as_str().to_string(), body),
    };

    ClientError::Api {
        method,
        path: path.to_string(),
        status: status.as_u16(),
        code,
        message,
    }
}

impl Transport for EventSquareClient {
    fn meta(&self) -> &Parameters {
        &self.config.meta
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> Result<Value, ClientError> {
        self.execute(method, path, params).await
    }
}
