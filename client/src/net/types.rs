//! Request and response bodies exchanged with the weather-platform API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Counters and active alerts shown by the dashboard widgets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_users: u64,
    pub active_users: u64,
    pub pending_articles: u64,
    pub published_articles: u64,
    pub notifications_sent: u64,
    pub active_alerts: Vec<WeatherAlert>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: String,
    pub region: String,
    #[serde(default)]
    pub severity: AlertSeverity,
    pub headline: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Advisory,
    Watch,
    Warning,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AlertSeverity {
    /// CSS modifier used by the alert list.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Watch => "watch",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }
}
