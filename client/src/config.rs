//! Build-time client configuration.
//!
//! Values come from environment variables captured when the WASM bundle is
//! compiled (`option_env!`), so a deploy decides them and no source edit can
//! ship the admin bypass switched on by accident.
//!
//! - `COLLEGE_API_BASE`: prefix for REST calls (default `/api`).
//! - `COLLEGE_DEV_BYPASS_ADMIN`: `1/true/yes/on` enables the admin bypass
//!   (default off).

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use portal::LoginConfig;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub login: LoginConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), login: LoginConfig::default() }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("COLLEGE_API_BASE"), option_env!("COLLEGE_DEV_BYPASS_ADMIN"))
    }

    fn from_values(api_base: Option<&str>, dev_bypass_admin: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let dev_bypass_admin = dev_bypass_admin.and_then(parse_bool).unwrap_or(false);
        Self { api_base, login: LoginConfig { dev_bypass_admin } }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
