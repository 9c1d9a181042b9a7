//! REST calls used by the auth pages and the dashboard.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers route failures through
//! `AppContext::handle_api_error`, which owns loading, session, and redirect
//! side effects.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, LOGIN_ENDPOINT};
use super::http::{self, Method, PreparedRequest};
use super::types::{DashboardSummary, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest};
use crate::state::session::{Session, SessionRecord};
use crate::util::forms::LoginInput;

pub const FORGOT_PASSWORD_ENDPOINT: &str = "/api/auth/forgot-password";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const DASHBOARD_SUMMARY_ENDPOINT: &str = "/api/v1/dashboard/summary";

fn login_request(input: &LoginInput) -> Result<PreparedRequest, ApiError> {
    PreparedRequest::new(Method::Post, LOGIN_ENDPOINT, None)
        .json(&LoginRequest { email: input.email.clone(), password: input.password.clone() })
}

fn forgot_password_request(email: &str) -> Result<PreparedRequest, ApiError> {
    PreparedRequest::new(Method::Post, FORGOT_PASSWORD_ENDPOINT, None)
        .json(&ForgotPasswordRequest { email: email.to_owned() })
}

fn logout_request(token: Option<&str>) -> PreparedRequest {
    PreparedRequest::new(Method::Post, LOGOUT_ENDPOINT, token)
}

fn dashboard_summary_request(token: Option<&str>) -> PreparedRequest {
    PreparedRequest::new(Method::Get, DASHBOARD_SUMMARY_ENDPOINT, token)
}

/// Reject login responses that would not produce a logged-in session.
fn accept_login_record(record: SessionRecord) -> Result<SessionRecord, ApiError> {
    match Session::from_record(record).record() {
        Some(record) => Ok(record.clone()),
        None => Err(ApiError::Decode("login response missing user id".to_owned())),
    }
}

fn accept_forgot_password(resp: ForgotPasswordResponse) -> Result<(), ApiError> {
    if resp.ok {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: 200,
            message: resp.message.unwrap_or_else(|| "password reset request rejected".to_owned()),
        })
    }
}

/// Exchange credentials for a session record via `POST /api/auth/login`.
///
/// # Errors
///
/// `InvalidCredentials` on 401, `Decode` when the response lacks a user id,
/// otherwise any transport/status error.
pub async fn login(input: &LoginInput) -> Result<SessionRecord, ApiError> {
    let record = http::execute_json::<SessionRecord>(login_request(input)?).await?;
    accept_login_record(record)
}

/// Ask the server to email a reset link via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Returns an error if the request fails or the server reports `ok: false`.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    let resp = http::execute_json::<ForgotPasswordResponse>(forgot_password_request(email)?).await?;
    accept_forgot_password(resp)
}

/// Best-effort server-side logout. The local session is cleared by the caller regardless.
pub async fn logout(token: Option<String>) {
    let _ = http::execute(logout_request(token.as_deref())).await;
}

/// Fetch the dashboard widget data from `/api/v1/dashboard/summary`.
///
/// # Errors
///
/// Returns the classified error for any failed request.
pub async fn fetch_dashboard_summary(token: Option<String>) -> Result<DashboardSummary, ApiError> {
    http::execute_json(dashboard_summary_request(token.as_deref())).await
}
