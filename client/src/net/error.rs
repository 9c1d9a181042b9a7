//! Typed failures for HTTP calls and the state changes they imply.
//!
//! DESIGN
//! ======
//! The transport never navigates. It classifies a response into `ApiError`,
//! and the calling layer applies `ApiError::outcome()` (clear loading, drop
//! the session, redirect) through `AppContext`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::guard::LOGIN_PATH;

/// Auth endpoint that exchanges credentials for a session.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// 401 from the login endpoint itself.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// 401 from any other endpoint.
    #[error("session expired")]
    Unauthorized,

    /// 403 carrying the server's force-relogin flag.
    #[error("session invalidated, sign in again")]
    ForceRelogin,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response decode failed: {0}")]
    Decode(String),
}

/// State changes the caller must apply after a failed request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FailureOutcome {
    pub clear_loading: bool,
    pub clear_session: bool,
    pub redirect: Option<&'static str>,
}

impl ApiError {
    /// Every failure is terminal for its request, so loading always clears.
    #[must_use]
    pub fn outcome(&self) -> FailureOutcome {
        match self {
            Self::Unauthorized | Self::ForceRelogin => {
                FailureOutcome { clear_loading: true, clear_session: true, redirect: Some(LOGIN_PATH) }
            }
            _ => FailureOutcome { clear_loading: true, clear_session: false, redirect: None },
        }
    }
}

/// Map a response to `Ok(())` for 2xx or the matching `ApiError`.
///
/// # Errors
///
/// Returns the classified error for any non-2xx status.
pub fn classify_response(endpoint: &str, status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(error_message)
        .map_or_else(|| fallback_message(status, body), ToOwned::to_owned);
    let login = is_login_endpoint(endpoint);

    match status {
        401 if login => Err(ApiError::InvalidCredentials),
        401 => Err(ApiError::Unauthorized),
        403 if !login && parsed.as_ref().is_some_and(force_relogin_requested) => Err(ApiError::ForceRelogin),
        403 => Err(ApiError::Forbidden(message)),
        500..=599 => Err(ApiError::Server(message)),
        _ => Err(ApiError::Status { status, message }),
    }
}

/// Whether `endpoint` (path, optionally with query or absolute URL) is the login call.
#[must_use]
pub fn is_login_endpoint(endpoint: &str) -> bool {
    let path = endpoint.split(['?', '#']).next().unwrap_or_default();
    let path = match path.find("://") {
        Some(scheme_end) => {
            let rest = &path[scheme_end + 3..];
            rest.find('/').map_or("", |i| &rest[i..])
        }
        None => path,
    };
    path.trim_end_matches('/') == LOGIN_ENDPOINT
}

fn force_relogin_requested(body: &serde_json::Value) -> bool {
    body.get("force_relogin")
        .or_else(|| body.get("forceRelogin"))
        .is_some_and(is_truthy)
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        serde_json::Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        _ => false,
    }
}

fn error_message(body: &serde_json::Value) -> Option<&str> {
    body.get("message")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("error").and_then(|v| v.as_str()))
        .filter(|m| !m.trim().is_empty())
}

fn fallback_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.len() > 200 {
        format!("HTTP {status}")
    } else {
        trimmed.to_owned()
    }
}
