//! Bearer-authenticated request execution.
//!
//! Resource services depend on the [`GraphSession`] capability, not on
//! a concrete client type; [`http::GraphHttpClient`] is the production
//! implementation.

pub mod headers;
pub mod http;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

pub use http::GraphHttpClient;

/// One outbound resource request: method, endpoint, and optional
/// payload pieces.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub method: Method,
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub json: Option<Value>,
    pub headers: HeaderMap,
    /// When set, a 2xx response returns a synthetic
    /// `{"status_code": n}` marker and the body is ignored.
    pub expect_empty_body: bool,
}

impl GraphRequest {
    /// Start a request with an explicit method.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            form: Vec::new(),
            json: None,
            headers: HeaderMap::new(),
            expect_empty_body: false,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Add a URL query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Attach a JSON body, skipped when `body` is `None`.
    pub fn with_optional_json(mut self, body: Option<Value>) -> Self {
        self.json = body;
        self
    }

    /// Add a form field (urlencoded body).
    pub fn with_form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    /// Add an extra header. Callers may override Content-Type this way
    /// but never Authorization; the executor applies the bearer token
    /// last.
    pub fn with_header(
        mut self,
        name: reqwest::header::HeaderName,
        value: reqwest::header::HeaderValue,
    ) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Mark the response as status-only (e.g. 204 deletes).
    pub fn expect_empty_body(mut self) -> Self {
        self.expect_empty_body = true;
        self
    }
}

/// Capability the resource services are written against.
#[async_trait]
pub trait GraphSession: Send + Sync {
    /// Execute one request and return the decoded response.
    async fn execute(&self, request: GraphRequest) -> Result<Value>;
}

/// Blanket impl for `Arc<T>`.
#[async_trait]
impl<T: GraphSession + ?Sized> GraphSession for std::sync::Arc<T> {
    async fn execute(&self, request: GraphRequest) -> Result<Value> {
        (**self).execute(request).await
    }
}
