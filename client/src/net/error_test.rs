use super::*;

const ENDPOINTS: &[&str] = &[
    "/api/v1/users",
    "/api/v1/articles/12",
    "/api/v1/notifications?page=2",
    "/api/v1/settings/smtp",
    "/api/auth/forgot-password",
    "/api/auth/logout",
    "https://api.example.test/api/v1/dashboard/summary",
];

// =============================================================
// classify_response
// =============================================================

#[test]
fn success_statuses_are_ok() {
    for status in [200, 201, 204, 299] {
        assert_eq!(classify_response("/api/v1/users", status, ""), Ok(()));
    }
}

#[test]
fn unauthorized_outside_login_redirects() {
    let err = classify_response("/api/v1/users", 401, "").unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    let outcome = err.outcome();
    assert!(outcome.clear_loading);
    assert!(outcome.clear_session);
    assert_eq!(outcome.redirect, Some(LOGIN_PATH));
}

#[test]
fn unauthorized_on_login_is_invalid_credentials() {
    let err = classify_response(LOGIN_ENDPOINT, 401, r#"{"message":"bad password"}"#).unwrap_err();
    assert_eq!(err, ApiError::InvalidCredentials);
    assert_eq!(err.outcome().redirect, None);
    assert!(err.outcome().clear_loading);
}

#[test]
fn force_relogin_redirects_for_every_endpoint_but_login() {
    for endpoint in ENDPOINTS {
        let err = classify_response(endpoint, 403, r#"{"force_relogin":true}"#).unwrap_err();
        assert_eq!(err, ApiError::ForceRelogin, "endpoint {endpoint}");
        assert_eq!(err.outcome().redirect, Some(LOGIN_PATH), "endpoint {endpoint}");
    }
}

#[test]
fn force_relogin_on_login_endpoint_does_not_redirect() {
    let err = classify_response("/api/auth/login?next=/", 403, r#"{"force_relogin":true}"#).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.outcome().redirect, None);
}

#[test]
fn force_relogin_accepts_camel_case_and_truthy_values() {
    for body in [
        r#"{"forceRelogin":true}"#,
        r#"{"force_relogin":1}"#,
        r#"{"force_relogin":"true"}"#,
    ] {
        assert_eq!(classify_response("/api/v1/users", 403, body), Err(ApiError::ForceRelogin), "body {body}");
    }
}

#[test]
fn plain_forbidden_keeps_session() {
    for body in ["", r#"{"force_relogin":false}"#, r#"{"message":"admins only"}"#, "<html>"] {
        let err = classify_response("/api/v1/users", 403, body).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)), "body {body}");
        let outcome = err.outcome();
        assert!(!outcome.clear_session);
        assert_eq!(outcome.redirect, None);
    }
}

#[test]
fn forbidden_uses_body_message() {
    let err = classify_response("/api/v1/users", 403, r#"{"message":"admins only"}"#).unwrap_err();
    assert_eq!(err, ApiError::Forbidden("admins only".to_owned()));
}

#[test]
fn server_error_clears_loading_without_redirect() {
    let err = classify_response("/api/v1/users", 500, r#"{"error":"db down"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("db down".to_owned()));
    let outcome = err.outcome();
    assert!(outcome.clear_loading);
    assert!(!outcome.clear_session);
    assert_eq!(outcome.redirect, None);
}

#[test]
fn other_statuses_carry_status_and_fallback_message() {
    let err = classify_response("/api/v1/users", 404, "").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: "HTTP 404".to_owned() });

    let err = classify_response("/api/v1/users", 422, "name taken").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 422, message: "name taken".to_owned() });
}

// =============================================================
// is_login_endpoint
// =============================================================

#[test]
fn login_endpoint_matching_ignores_query_origin_and_trailing_slash() {
    assert!(is_login_endpoint("/api/auth/login"));
    assert!(is_login_endpoint("/api/auth/login/"));
    assert!(is_login_endpoint("/api/auth/login?x=1"));
    assert!(is_login_endpoint("https://host.test/api/auth/login"));
    assert!(!is_login_endpoint("/api/auth/login-history"));
    assert!(!is_login_endpoint("/api/auth/logout"));
}

// =============================================================
// outcomes
// =============================================================

#[test]
fn transport_failures_never_redirect() {
    for err in [ApiError::Transport("offline".to_owned()), ApiError::Timeout(15_000), ApiError::Decode("eof".to_owned())] {
        let outcome = err.outcome();
        assert!(outcome.clear_loading);
        assert!(!outcome.clear_session);
        assert_eq!(outcome.redirect, None);
    }
}
