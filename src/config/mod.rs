//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the service starts with no configuration at all. Numeric variables are
//! validated at load time; a bad value is a startup error rather than a
//! silently-ignored override.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Environment variable names. Keeping them public lets tests refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_CACHE_TTL_SECONDS: &str = "CACHE_TTL_SECONDS";
pub const ENV_CACHE_CAPACITY: &str = "CACHE_CAPACITY";
pub const ENV_RATE_LIMIT_REQUESTS: &str = "RATE_LIMIT_REQUESTS";
pub const ENV_RATE_LIMIT_WINDOW_SECONDS: &str = "RATE_LIMIT_WINDOW_SECONDS";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 30;
const DEFAULT_RATE_LIMIT_WINDOW_SECONDS: i64 = 60;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    cache_ttl_seconds: u64,
    cache_capacity: u64,
    rate_limit_requests: u32,
    rate_limit_window_seconds: i64,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            bind_addr,
            cache_ttl_seconds: parse_var(ENV_CACHE_TTL_SECONDS, DEFAULT_CACHE_TTL_SECONDS)?,
            cache_capacity: parse_var(ENV_CACHE_CAPACITY, DEFAULT_CACHE_CAPACITY)?,
            rate_limit_requests: parse_var(ENV_RATE_LIMIT_REQUESTS, DEFAULT_RATE_LIMIT_REQUESTS)?,
            rate_limit_window_seconds: parse_var(
                ENV_RATE_LIMIT_WINDOW_SECONDS,
                DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
            )?,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Time-to-live for cached crawl results.
    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_ttl_seconds
    }
    /// Maximum number of cached crawl results.
    pub fn cache_capacity(&self) -> u64 {
        self.cache_capacity
    }
    /// Requests allowed per rate-limit window, per client IP.
    pub fn rate_limit_requests(&self) -> u32 {
        self.rate_limit_requests
    }
    /// Length of the rate-limit window in seconds.
    pub fn rate_limit_window_seconds(&self) -> i64 {
        self.rate_limit_window_seconds
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: err.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
