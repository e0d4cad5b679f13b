//! # HTTP client with middleware stages
//!
//! [`HttpClient`] is a thin wrapper around [`reqwest::Client`] bound to one
//! base URL. Every request built with [`HttpClient::request`] passes through
//! the request stage of each registered [`Middleware`], and every response
//! received by [`HttpClient::send`] passes through their response stage
//! before being checked for success. Cross-cutting policies such as bearer
//! authentication and session expiry therefore live in one place instead of
//! in each API call.
//!
//! Requests are sent once: no retries and no client-side timeout.

mod middleware;

pub use middleware::{BearerAuth, ExpireOnUnauthorized, Middleware};

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// An HTTP client bound to a base URL, with request/response middleware.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            middleware: Vec::new(),
        }
    }

    /// Append a middleware stage.
    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` under the base URL.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Start a request to `path`, with every request stage applied.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.middleware
            .iter()
            .fold(self.client.request(method, url), |request, stage| {
                stage.before_request(request)
            })
    }

    /// Send a request, run every response stage, and fail on non-success statuses.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        for stage in &self.middleware {
            stage.after_response(status);
        }

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).ok();
        tracing::debug!("{} responded with {}", self.base_url, status);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Send a request and decode its JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl HttpClient {
    /// Send a request whose success body is informational only.
    ///
    /// Status handling is the same as [`HttpClient::send`], but a 2xx body that
    /// cannot be read or decoded as `T` yields `Ok(None)` instead of an error:
    /// the server has already applied the change.
    pub async fn send_json_lenient<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = self.send(request).await?;
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read response body from {}: {}", self.base_url, e);
                return Ok(None);
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring undecodable response body from {}: {}", self.base_url, e);
                Ok(None)
            }
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// Join a base URL and a path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
