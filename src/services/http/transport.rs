//! HTTP transport interface used by the API client.
use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport-layer errors (connect/request/body).
///
/// The message is the underlying failure text, shown to the user verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Body(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        })
    }
}

/// One outgoing call: method, path relative to the configured origin, query and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub request_id: Uuid,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            request_id: Uuid::new_v4(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A minimal HTTP interface.
///
/// Implementations must be cheap to clone (typically `Arc<...>` inside).
/// No retry, timeout or de-duplication happens at this layer.
#[async_trait]
pub trait HttpTransport: Clone + Send + Sync + 'static {
    // Returns the transport name (for logging).
    fn backend_name(&self) -> &'static str;

    // Send the request and read the whole body. Non-2xx statuses are not errors here.
    async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_query_and_body() {
        let req = ApiRequest::get("/user/get")
            .query("first_name", "Ivan")
            .json(&serde_json::json!({"a": 1}))
            .unwrap();

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query, vec![("first_name".to_string(), "Ivan".to_string())]);
        assert_eq!(req.body, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn success_is_2xx_only() {
        let ok = ApiResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = ApiResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
