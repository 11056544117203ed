//! API configuration parsed from environment variables.

use crate::register::REGISTER_PATH;

pub const DEFAULT_API_ORIGIN: &str = "https://culinarytech-backend.onrender.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API origin `{0}` (expected http:// or https:// followed by a host)")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host without a trailing slash.
    pub origin: String,
    pub timeouts: Timeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { origin: DEFAULT_API_ORIGIN.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `CULINARY_API_ORIGIN`: default `https://culinarytech-backend.onrender.com`
    /// - `CULINARY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CULINARY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if `CULINARY_API_ORIGIN` is not an
    /// http(s) origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = match std::env::var("CULINARY_API_ORIGIN") {
            Ok(raw) => parse_origin(&raw)?,
            Err(_) => DEFAULT_API_ORIGIN.to_owned(),
        };
        let timeouts = Timeouts {
            request_secs: env_parse_u64("CULINARY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CULINARY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { origin, timeouts })
    }

    /// Default timeouts with an explicit origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if `origin` is not an http(s) origin.
    pub fn with_origin(origin: &str) -> Result<Self, ConfigError> {
        Ok(Self { origin: parse_origin(origin)?, timeouts: Timeouts::default() })
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}{REGISTER_PATH}", self.origin)
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme and a host.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOrigin`] for anything else.
pub fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidOrigin(raw.to_owned()))?;
    if host.is_empty() || host.contains('/') {
        return Err(ConfigError::InvalidOrigin(raw.to_owned()));
    }
    Ok(origin.to_owned())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
