//! The request executor: attaches a bearer token, issues the call
//! once, and classifies the response.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::auth::AuthSession;
use crate::config::{self, CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};

use super::headers::authorized_headers;
use super::{GraphRequest, GraphSession};

/// Bearer-authenticated HTTP client for Graph resource endpoints.
///
/// One attempt per request: no retry, no backoff. Resource failures
/// never mutate the session state.
pub struct GraphHttpClient {
    client: reqwest::Client,
    session: Arc<AuthSession>,
    resource_root: String,
    api_version: String,
}

impl GraphHttpClient {
    /// Create an executor over the given session with default timeouts.
    pub fn new(session: Arc<AuthSession>) -> Result<Self> {
        Self::with_timeout(session, REQUEST_TIMEOUT)
    }

    /// Create an executor with a custom per-request timeout.
    pub fn with_timeout(session: Arc<AuthSession>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            client,
            session,
            resource_root: config::RESOURCE.to_string(),
            api_version: config::DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Override the resource root. Used by tests to point at a mock
    /// server.
    pub fn with_resource_root(mut self, root: impl Into<String>) -> Self {
        self.resource_root = root.into();
        self
    }

    /// Use a non-default API version (e.g. `beta`).
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// The session this executor draws tokens from.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    fn build_url(&self, endpoint: &str) -> String {
        config::resource_url(&self.resource_root, &self.api_version, endpoint)
    }
}

#[async_trait::async_trait]
impl GraphSession for GraphHttpClient {
    async fn execute(&self, request: GraphRequest) -> Result<Value> {
        // Never attach a stale token: revalidate (and refresh when
        // under the threshold) before every call.
        self.session.validate_default().await?;
        let token = self.session.access_token().await?;

        let url = self.build_url(&request.endpoint);
        let headers = authorized_headers(&token, &request.headers)?;
        let method = request.method.clone();

        debug!(method = %method, url = %url, "Graph request");

        let mut builder = self.client.request(method.clone(), &url).headers(headers);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_code = status.as_u16();

        if status.is_success() && request.expect_empty_body {
            return Ok(json!({ "status_code": status_code }));
        }

        let body = response.bytes().await?;

        if status.is_success() {
            if body.is_empty() {
                return Ok(json!({
                    "message": "success",
                    "status_code": status_code,
                }));
            }
            return serde_json::from_slice::<Value>(&body).map_err(|e| Error::MalformedResponse {
                url: url.clone(),
                message: e.to_string(),
            });
        }

        // Non-2xx: structured error, logged before being surfaced.
        let error_body = serde_json::from_slice::<Value>(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
        error!(
            status = status_code,
            method = %method,
            url = %url,
            body = %error_body,
            "Graph request failed"
        );
        Err(Error::Api {
            status: status_code,
            method: method.to_string(),
            url,
            body: error_body,
        })
    }
}

impl std::fmt::Debug for GraphHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHttpClient")
            .field("resource_root", &self.resource_root)
            .field("api_version", &self.api_version)
            .finish()
    }
}
