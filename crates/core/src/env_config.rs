//! Environment-backed configuration, read once at process start.

use std::fmt;
use std::time::Duration;

use crate::{
    ConfigError, DATABASE_URL_VAR, PG_ACQUIRE_TIMEOUT_VAR, PG_MAX_CONNECTIONS_VAR,
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + fmt::Display>(var: &str, default: T) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

fn parse_with_default<T: std::str::FromStr + fmt::Display>(
    var: &str,
    raw: Option<String>,
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

/// Settings for a sync run. Built once in `main` and handed to the storage
/// constructor; nothing reads the environment after this point.
#[derive(Clone)]
pub struct SyncConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl SyncConfig {
    /// Reads `DATABASE_URL` (required) and the optional pool knobs.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`SyncConfig::from_env`] but against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR).ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::EmptyVar(DATABASE_URL_VAR));
        }

        let max_connections = parse_with_default(
            PG_MAX_CONNECTIONS_VAR,
            lookup(PG_MAX_CONNECTIONS_VAR),
            PG_POOL_MAX_CONNECTIONS,
        )
        .max(1);
        let acquire_timeout_secs = parse_with_default(
            PG_ACQUIRE_TIMEOUT_VAR,
            lookup(PG_ACQUIRE_TIMEOUT_VAR),
            PG_POOL_ACQUIRE_TIMEOUT_SECS,
        );

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

// Connection strings carry credentials.
impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
