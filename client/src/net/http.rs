//! Thin HTTP wrapper: request preparation, bearer injection, timeout, and
//! response classification.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR): sending fails with `ApiError::Transport` since these
//! calls are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, classify_response};

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Origin, optionally with a base path, prepended to every request path.
/// Empty means same-origin.
pub const API_ORIGIN: &str = match option_env!("WEATHERDESK_API_ORIGIN") {
    Some(origin) => origin,
    None => "",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request ready to hand to the browser fetch layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    /// Endpoint path as passed in, without `API_ORIGIN`.
    pub path: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Build a request for `path`, attaching `Authorization: Bearer` when a
    /// non-empty token is supplied.
    #[must_use]
    pub fn new(method: Method, path: &str, token: Option<&str>) -> Self {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        Self { method, path: path.to_owned(), url: format!("{API_ORIGIN}{path}"), headers, body: None }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.headers.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
        self.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        self.body = Some(raw);
        Ok(self)
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Send `request` and return the body of a 2xx response.
///
/// # Errors
///
/// Returns the classified `ApiError` for transport failures, timeouts, and
/// non-2xx statuses.
pub async fn execute(request: PreparedRequest) -> Result<String, ApiError> {
    let result = match send_raw(&request).await {
        Ok((status, body)) => classify(&request, status, body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        leptos::logging::warn!("{} {} failed: {e}", request.method.as_str(), request.url);
    }
    result
}

/// Send `request` and decode a JSON response body.
///
/// # Errors
///
/// Returns everything `execute` does, plus `ApiError::Decode` for bodies that
/// do not match `T`.
pub async fn execute_json<T: DeserializeOwned>(request: PreparedRequest) -> Result<T, ApiError> {
    let body = execute(request).await?;
    decode_body(&body)
}

/// Classify against the endpoint path, so an origin with a base path still
/// recognizes the login call.
pub(crate) fn classify(request: &PreparedRequest, status: u16, body: String) -> Result<String, ApiError> {
    classify_response(&request.path, status, &body).map(|()| body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_raw(request: &PreparedRequest) -> Result<(u16, String), ApiError> {
    use futures::future::{Either, select};
    use gloo_net::http::{Method as FetchMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Patch => FetchMethod::PATCH,
        Method::Delete => FetchMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match &request.body {
        Some(body) => builder.body(body.clone()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let send = Box::pin(built.send());
    let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(send, timer).await {
        Either::Left((Ok(resp), _)) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok((status, body))
        }
        Either::Left((Err(e), _)) => Err(ApiError::Transport(e.to_string())),
        Either::Right(_) => Err(ApiError::Timeout(REQUEST_TIMEOUT_MS)),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn send_raw(request: &PreparedRequest) -> Result<(u16, String), ApiError> {
    let _ = request;
    Err(ApiError::Transport("not available on server".to_owned()))
}
