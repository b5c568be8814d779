use chrono::Duration;
use std::str::FromStr;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
/// One day minus 45 minutes, so a daily agent run never looks late.
const DEFAULT_HEARTBEAT_WINDOW_MINUTES: i64 = 24 * 60 - 45;
const DEFAULT_LICENSE_EXPIRE_WARNING_DAYS: i64 = 42;
const DEFAULT_LIST_LIMIT: u64 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Maximum age of the newest heartbeat for a used product to count as received.
    pub heartbeat_window: Duration,
    /// Remaining license time at or below which a license is expiring soon.
    pub license_expire_warning: Duration,
    /// Default row limit of the license, heartbeat and update overviews.
    pub list_limit: u64,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub session_secure: bool,
    /// Origin allowed to call the API with credentials from another host.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            heartbeat_window: window_or(
                &lookup,
                "HEARTBEAT_WINDOW_MINUTES",
                DEFAULT_HEARTBEAT_WINDOW_MINUTES,
                Duration::try_minutes,
            )?,
            license_expire_warning: window_or(
                &lookup,
                "LICENSE_EXPIRE_WARNING_DAYS",
                DEFAULT_LICENSE_EXPIRE_WARNING_DAYS,
                Duration::try_days,
            )?,
            list_limit: parse_or(&lookup, "LIST_LIMIT", DEFAULT_LIST_LIMIT)?,
            admin_username: lookup("ADMIN_USERNAME").filter(|v| !v.is_empty()),
            admin_password: lookup("ADMIN_PASSWORD").filter(|v| !v.is_empty()),
            session_secure: parse_or(&lookup, "SESSION_SECURE", false)?,
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.is_empty()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

/// Parses a positive window length and converts it with `to_duration`.
fn window_or<F>(
    lookup: &F,
    name: &str,
    default: i64,
    to_duration: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let amount = parse_or(lookup, name, default)?;

    Some(amount)
        .filter(|amount| *amount > 0)
        .and_then(to_duration)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: amount.to_string(),
        })
}
