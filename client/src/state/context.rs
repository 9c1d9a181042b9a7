//! Application context shared with every page and component.
//!
//! DESIGN
//! ======
//! Replaces a process-global session object: `App` builds one `AppContext`
//! with the storage backend of its choice and provides it through Leptos
//! context. Failed requests are interpreted here, not inside the transport.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::notice::{NoticeKind, NoticeState};
use super::session::SessionStore;
use crate::net::error::ApiError;
use crate::util::dark_mode;
use crate::util::storage::KeyValueStorage;

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<SessionStore>,
    pub notices: RwSignal<NoticeState>,
}

impl AppContext {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            session: RwSignal::new(SessionStore::new(storage, dark_mode::system_theme())),
            notices: RwSignal::new(NoticeState::default()),
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    /// Fetch the context provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics when called outside the `App` component tree.
    #[must_use]
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    #[must_use]
    pub fn access_token_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.session().access_token().map(ToOwned::to_owned))
    }

    pub fn set_loading(&self, loading: bool) {
        self.session.update(|s| s.set_loading(loading));
    }

    /// Show a toast that dismisses itself after a few seconds.
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.notices.try_update(|n| n.push(kind, message)).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        {
            let notices = self.notices;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                notices.update(|n| {
                    n.dismiss(id);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    /// Apply the state changes `err` calls for and return the redirect target, if any.
    ///
    /// Invalid credentials are left for the login form to render inline.
    pub fn handle_api_error(&self, err: &ApiError) -> Option<&'static str> {
        self.session.update(|s| s.apply_failure(&err.outcome()));
        self.report_api_error(err)
    }

    /// Toast `err` and return its redirect target without touching session state.
    pub fn report_api_error(&self, err: &ApiError) -> Option<&'static str> {
        if *err != ApiError::InvalidCredentials {
            self.notify(NoticeKind::Error, err.to_string());
        }
        err.outcome().redirect
    }

    /// Clear the local session and tell the server, best-effort.
    pub fn sign_out(&self) {
        let token = self.access_token_untracked();
        self.session.update(SessionStore::logout);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout(token));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }
}
