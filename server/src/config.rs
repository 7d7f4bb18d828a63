//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (via `dotenvy`) before calling [`ServerConfig::from_env`].
//!
//! Required:
//! - `DATABASE_URL`
//!
//! Optional:
//! - `PORT`: default 4000
//! - `FRONTEND_API_LINK`: CORS origin, default `http://localhost:3000`
//! - `SESSION_TTL_HOURS`: default 720 (30 days)
//! - `DB_MAX_CONNECTIONS`: default 5
//! - `ALLOW_REGISTRATION`: default true

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_SESSION_TTL_HOURS: i32 = 720;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub frontend_origin: String,
    pub session_ttl_hours: i32,
    pub db_max_connections: u32,
    pub allow_registration: bool,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric/boolean
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let frontend_origin =
            std::env::var("FRONTEND_API_LINK").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_owned());
        let session_ttl_hours = env_parse("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        if session_ttl_hours <= 0 {
            return Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: session_ttl_hours.to_string() });
        }
        let db_max_connections = env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let allow_registration = match std::env::var("ALLOW_REGISTRATION") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "ALLOW_REGISTRATION", value: raw })?,
            Err(_) => true,
        };

        Ok(Self { database_url, port, frontend_origin, session_ttl_hours, db_max_connections, allow_registration })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}
