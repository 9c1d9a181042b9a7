//! Per-navigation route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page except the public landing page is wrapped in
//! `components::guarded::Guarded`, which runs `evaluate` on each location
//! change and performs the redirect it returns.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionStore;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Pages that only make sense while logged out.
const AUTH_ONLY_PATHS: &[&str] = &[LOGIN_PATH, FORGOT_PASSWORD_PATH];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectDashboard,
    RedirectLogin,
}

impl RouteDecision {
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectDashboard => Some(DASHBOARD_PATH),
            Self::RedirectLogin => Some(LOGIN_PATH),
        }
    }
}

/// Strip query, fragment and trailing slashes. An empty path is the landing path.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { LANDING_PATH } else { trimmed }
}

#[must_use]
pub fn is_auth_only(path: &str) -> bool {
    AUTH_ONLY_PATHS.contains(&normalize_path(path))
}

/// Decide what navigating to `path` should do.
///
/// Hydrates the store from storage the first time a logged-out session is
/// consulted, and clears the session before any login redirect.
pub fn evaluate(path: &str, store: &mut SessionStore) -> RouteDecision {
    let path = normalize_path(path);
    if path == LANDING_PATH {
        return RouteDecision::Render;
    }

    if !store.session().is_authenticated() && !store.is_hydrated() {
        store.hydrate();
    }

    let authenticated = store.session().is_authenticated();
    let auth_only = is_auth_only(path);

    if authenticated && auth_only {
        RouteDecision::RedirectDashboard
    } else if !authenticated && !auth_only {
        store.logout();
        RouteDecision::RedirectLogin
    } else {
        RouteDecision::Render
    }
}
