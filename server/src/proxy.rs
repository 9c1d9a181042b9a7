//! Same-origin proxy from `/api/*` to the upstream weather-platform API.
//!
//! DESIGN
//! ======
//! The browser bundle only ever talks to its own origin. Upstream statuses
//! (401/403/500 included) pass through untouched so the client can classify
//! them; only failures to reach the upstream are mapped here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::config::ServerConfig;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, header::CACHE_CONTROL, header::CONTENT_DISPOSITION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    #[error("request body read failed: {0}")]
    Body(String),

    #[error("path not allowed: {0}")]
    Path(String),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) | Self::Path(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared HTTP client plus upstream base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    /// Build the upstream client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { client, upstream: config.upstream_api_url.clone() })
    }

    #[must_use]
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.upstream)
    }
}

/// Whether `path` has a `.` or `..` segment, literal or percent-encoded.
/// URL parsing upstream resolves these, which would escape `/api`.
#[must_use]
pub fn has_dot_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    })
}

/// Forward one request upstream and relay status, selected headers, and body.
///
/// # Errors
///
/// Returns a `ProxyError` when the body cannot be read or the upstream cannot
/// be reached in time.
pub async fn forward(State(proxy): State<ApiProxy>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    if has_dot_segment(parts.uri.path()) {
        return Err(ProxyError::Path(parts.uri.path().to_owned()));
    }
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = proxy.upstream_url(path_and_query);

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut upstream = proxy.client.request(parts.method.clone(), &url);
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in parts.headers.get_all(name) {
            upstream = upstream.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let resp = upstream.send().await.map_err(|e| {
        if e.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Upstream(e.to_string())
        }
    })?;

    let status = resp.status();
    let mut headers = HeaderMap::new();
    for name in &FORWARDED_RESPONSE_HEADERS {
        if let Some(value) = resp.headers().get(name) {
            headers.insert(name.clone(), value.clone());
        }
    }
    let bytes = resp.bytes().await.map_err(|e| {
        if e.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Upstream(e.to_string())
        }
    })?;

    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %url, status = status.as_u16(), "upstream server error");
    } else {
        tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied api request");
    }
    Ok((status, headers, bytes).into_response())
}
