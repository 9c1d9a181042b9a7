//! Session store: the authenticated user record plus UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard on every navigation and by the HTTP layer when
//! attaching bearer credentials. Held in a `RwSignal` inside `AppContext`,
//! so each write is visible to every reader on the next read.
//!
//! DESIGN
//! ======
//! `Session` is either empty or holds a record with a non-blank user id.
//! Anything else read from storage collapses to empty, so routing never sees
//! a half-populated session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::net::error::FailureOutcome;
use crate::util::storage::{KeyValueStorage, save_json};

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "weatherdesk.session";
/// Storage key of the persisted theme choice.
pub const THEME_KEY: &str = "weatherdesk.theme";

// =============================================================================
// SESSION RECORD
// =============================================================================

/// Persisted session blob. Unknown keys are kept in `extra` and written back.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(alias = "userId", deserialize_with = "deserialize_user_id")]
    pub user_id: String,
    #[serde(default, alias = "accessToken", alias = "token", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), access_token: Some(access_token.into()), extra: serde_json::Map::new() }
    }
}

/// Accept user ids written as strings or integers.
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer user id")),
    }
}

impl fmt::Debug for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRecord")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("extra", &self.extra)
            .finish()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Logged-out (empty) or logged-in session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session(Option<SessionRecord>);

impl Session {
    #[must_use]
    pub fn empty() -> Self {
        Self(None)
    }

    /// Wrap a record; a blank user id yields an empty session.
    #[must_use]
    pub fn from_record(record: SessionRecord) -> Self {
        if record.user_id.trim().is_empty() { Self(None) } else { Self(Some(record)) }
    }

    /// Decode a persisted session blob. Malformed input is an empty session.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<SessionRecord>(raw) {
            Ok(record) => Self::from_record(record),
            Err(e) => {
                leptos::logging::warn!("discarding malformed persisted session: {e}");
                Self(None)
            }
        }
    }

    #[must_use]
    pub fn record(&self) -> Option<&SessionRecord> {
        self.0.as_ref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|r| r.user_id.as_str())
    }

    /// Bearer credential, if present and non-empty.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.0
            .as_ref()
            .and_then(|r| r.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Look up an arbitrary field of the record (`user_id` and `access_token` included).
    #[must_use]
    pub fn field(&self, key: &str) -> Option<serde_json::Value> {
        let record = self.0.as_ref()?;
        match key {
            "user_id" => Some(serde_json::Value::String(record.user_id.clone())),
            "access_token" => record.access_token.clone().map(serde_json::Value::String),
            other => record.extra.get(other).cloned(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

// =============================================================================
// THEME
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Session plus UI preference state, backed by injectable storage.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    hydrated: bool,
    theme: Theme,
    loading: bool,
    storage: Arc<dyn KeyValueStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("hydrated", &self.hydrated)
            .field("theme", &self.theme)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build an unhydrated store. The theme comes from storage, else `fallback_theme`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>, fallback_theme: Theme) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(fallback_theme);
        Self { session: Session::empty(), hydrated: false, theme, loading: false, storage }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Restore the session from storage. Only the first call reads storage.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;
        if let Some(raw) = self.storage.get(SESSION_KEY) {
            self.session = Session::parse(&raw);
        }
    }

    /// Replace the session wholesale and mirror it to storage.
    pub fn replace(&mut self, session: Session) {
        match session.record() {
            Some(record) => save_json(self.storage.as_ref(), SESSION_KEY, record),
            None => self.storage.remove(SESSION_KEY),
        }
        self.session = session;
        self.hydrated = true;
    }

    pub fn login(&mut self, record: SessionRecord) {
        self.replace(Session::from_record(record));
    }

    /// Clear the session, remove the persisted record, and drop any pending loading state.
    pub fn logout(&mut self) {
        self.replace(Session::empty());
        self.loading = false;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.storage.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Apply the state changes a failed request calls for.
    pub fn apply_failure(&mut self, outcome: &FailureOutcome) {
        if outcome.clear_loading {
            self.loading = false;
        }
        if outcome.clear_session {
            self.logout();
        }
    }
}
