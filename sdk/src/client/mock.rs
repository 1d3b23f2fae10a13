//! Recording transport for tests.

use std::collections::HashMap;
use std::future::{ready, Future};
use std::sync::Mutex;

use serde_json::Value;

use super::error::ClientError;
use super::transport::{Method, Parameters, Transport};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: Parameters,
}

/// Serves canned JSON per path and records every request.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    meta: Parameters,
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> Self {
        self.meta.set(key, value);
        self
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self) -> Option<RecordedRequest> {
        self.requests().last().cloned()
    }
}

impl Transport for MockTransport {
    fn meta(&self) -> &Parameters {
        &self.meta
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method,
                path: path.to_string(),
                params: params.clone(),
            });
        }

        let result = match method {
            Method::Get => self
                .responses
                .get(path)
                .cloned()
                .ok_or_else(|| ClientError::NotFound {
                    method,
                    path: path.to_string(),
                }),
            Method::Put | Method::Delete => {
                Ok(self.responses.get(path).cloned().unwrap_or(Value::Null))
            }
        };

        ready(result)
    }
}
