use std::sync::Arc;

use super::*;
use crate::state::session::{SESSION_KEY, SessionRecord, Theme};
use crate::util::storage::{KeyValueStorage, MemoryStorage};

const PROTECTED_PATHS: &[&str] = &[
    "/dashboard",
    "/dashboard/",
    "/users",
    "/users/42/edit",
    "/articles?status=pending",
    "/notifications#compose",
    "/settings/smtp",
    "/settings/zoom",
    "/no-such-page",
];

const AUTH_ONLY: &[&str] = &["/login", "/login/", "/login?next=/users", "/forgot-password"];

fn logged_out() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), Theme::Light);
    (storage, store)
}

fn logged_in() -> (Arc<MemoryStorage>, SessionStore) {
    let (storage, mut store) = logged_out();
    store.login(SessionRecord::new("u-1", "tok"));
    (storage, store)
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_path_strips_query_fragment_and_slashes() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("//"), "/");
    assert_eq!(normalize_path("/?ref=mail"), "/");
    assert_eq!(normalize_path("/login/"), "/login");
    assert_eq!(normalize_path("/users?page=2#top"), "/users");
}

#[test]
fn auth_only_paths() {
    for path in AUTH_ONLY {
        assert!(is_auth_only(path), "{path}");
    }
    assert!(!is_auth_only("/dashboard"));
    assert!(!is_auth_only("/login-history"));
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn landing_path_always_renders() {
    let (_, mut out) = logged_out();
    let (_, mut inn) = logged_in();
    for path in ["/", "", "/?x=1"] {
        assert_eq!(evaluate(path, &mut out), RouteDecision::Render);
        assert_eq!(evaluate(path, &mut inn), RouteDecision::Render);
    }
}

#[test]
fn landing_path_does_not_hydrate() {
    let (_, mut store) = logged_out();
    evaluate("/", &mut store);
    assert!(!store.is_hydrated());
}

#[test]
fn logged_out_protected_paths_redirect_to_login() {
    for path in PROTECTED_PATHS {
        let (_, mut store) = logged_out();
        let decision = evaluate(path, &mut store);
        assert_eq!(decision, RouteDecision::RedirectLogin, "{path}");
        assert_eq!(decision.redirect_target(), Some(LOGIN_PATH));
    }
}

#[test]
fn logged_in_auth_only_paths_redirect_to_dashboard() {
    for path in AUTH_ONLY {
        let (_, mut store) = logged_in();
        let decision = evaluate(path, &mut store);
        assert_eq!(decision, RouteDecision::RedirectDashboard, "{path}");
        assert_eq!(decision.redirect_target(), Some(DASHBOARD_PATH));
    }
}

#[test]
fn logged_in_protected_paths_render() {
    for path in PROTECTED_PATHS {
        let (_, mut store) = logged_in();
        assert_eq!(evaluate(path, &mut store), RouteDecision::Render, "{path}");
    }
}

#[test]
fn logged_out_auth_only_paths_render() {
    for path in AUTH_ONLY {
        let (_, mut store) = logged_out();
        assert_eq!(evaluate(path, &mut store), RouteDecision::Render, "{path}");
    }
}

#[test]
fn unhydrated_store_restores_session_before_deciding() {
    let (storage, mut store) = logged_out();
    storage.set(SESSION_KEY, r#"{"user_id":"u-9","access_token":"t"}"#);
    assert_eq!(evaluate("/users", &mut store), RouteDecision::Render);
    assert_eq!(store.session().user_id(), Some("u-9"));

    let (storage, mut store) = logged_out();
    storage.set(SESSION_KEY, r#"{"user_id":"u-9","access_token":"t"}"#);
    assert_eq!(evaluate("/login", &mut store), RouteDecision::RedirectDashboard);
}

#[test]
fn hydration_is_attempted_once() {
    let (storage, mut store) = logged_out();
    assert_eq!(evaluate("/users", &mut store), RouteDecision::RedirectLogin);
    storage.set(SESSION_KEY, r#"{"user_id":"u-9","access_token":"t"}"#);
    assert_eq!(evaluate("/users", &mut store), RouteDecision::RedirectLogin);
}

#[test]
fn malformed_persisted_session_redirects_to_login() {
    let (storage, mut store) = logged_out();
    storage.set(SESSION_KEY, "{{{");
    assert_eq!(evaluate("/dashboard", &mut store), RouteDecision::RedirectLogin);
    assert!(!store.session().is_authenticated());
}

#[test]
fn login_redirect_clears_persisted_record() {
    let (storage, mut store) = logged_out();
    storage.set(SESSION_KEY, r#"{"access_token":"orphan"}"#);
    assert_eq!(evaluate("/settings", &mut store), RouteDecision::RedirectLogin);
    assert_eq!(storage.get(SESSION_KEY), None);
}

#[test]
fn render_decision_has_no_target() {
    assert_eq!(RouteDecision::Render.redirect_target(), None);
}
