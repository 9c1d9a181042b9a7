//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the weather-platform API, without trailing slash.
    pub upstream_api_url: String,
    pub upstream_timeout_secs: u64,
    /// Exact origin allowed by CORS; any origin when `None`.
    pub cors_allow_origin: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `UPSTREAM_API_URL`: base URL `/api/*` requests are forwarded to
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_TIMEOUT_SECS`: default 15
    /// - `CORS_ALLOW_ORIGIN`: single allowed origin
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let upstream_api_url = std::env::var("UPSTREAM_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing { var: "UPSTREAM_API_URL" })?;
        if !(upstream_api_url.starts_with("http://") || upstream_api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "UPSTREAM_API_URL", value: upstream_api_url });
        }

        let cors_allow_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .ok()
            .map(|origin| origin.trim().to_owned())
            .filter(|origin| !origin.is_empty());
        if let Some(origin) = &cors_allow_origin {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Invalid { var: "CORS_ALLOW_ORIGIN", value: origin.clone() });
            }
        }

        Ok(Self {
            port,
            upstream_api_url,
            upstream_timeout_secs: env_parse_u64("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
            cors_allow_origin,
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
