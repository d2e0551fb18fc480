//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};

/// Parse a raw variable value with a default fallback.
///
/// - If the value is absent: returns `default` silently (expected case).
/// - If the value is present but cannot be parsed: logs a warning and returns `default`.
pub fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Process configuration sourced from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection string. `None` when `DATABASE_URL` is unset or blank.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Facebook app id injected into the landing page.
    pub facebook_app_id: Option<String>,
    /// ScoreApp quiz the landing page forwards visitors to.
    pub quiz_url: Option<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            database_url: non_blank("DATABASE_URL"),
            host: non_blank("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_with_default("PORT", lookup("PORT").as_deref(), DEFAULT_PORT),
            facebook_app_id: non_blank("FACEBOOK_APP_ID"),
            quiz_url: non_blank("SCOREAPP_QUIZ_URL"),
        }
    }
}
