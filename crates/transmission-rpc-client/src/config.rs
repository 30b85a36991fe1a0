//! Client configuration.

use std::{env, time::Duration};

use serde::Deserialize;

/// Endpoint used when none is configured.
pub const DEFAULT_RPC_URL: &str = "http://localhost:9091/transmission/rpc";

/// Dispatch attempts per call when no budget is configured.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Upper bound on dispatch attempts per call.
pub const MAX_RETRIES: u32 = 10;

/// Clamps a configured retry budget into `1..=MAX_RETRIES`.
///
/// Zero and negative budgets fall back to [`DEFAULT_MAX_RETRIES`].
pub fn normalize_max_retries(max_retries: i64) -> u32 {
    if max_retries <= 0 {
        DEFAULT_MAX_RETRIES
    } else if max_retries > i64::from(MAX_RETRIES) {
        MAX_RETRIES
    } else {
        max_retries as u32
    }
}

/// Plain data description of a client, for loading from the environment or a
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// RPC endpoint.
    pub url: String,
    /// Basic auth username.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
    /// Dispatch attempts per call, normalized with [`normalize_max_retries`].
    pub max_retries: i64,
    /// Per call deadline in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            username: None,
            password: None,
            max_retries: i64::from(DEFAULT_MAX_RETRIES),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Read the configuration from the environment:
    /// - `TRANSMISSION_RPC_URL` (default: http://localhost:9091/transmission/rpc)
    /// - `TRANSMISSION_USERNAME`
    /// - `TRANSMISSION_PASSWORD`
    /// - `TRANSMISSION_MAX_RETRIES` (default: 2)
    /// - `TRANSMISSION_TIMEOUT_SECS`
    ///
    /// Unparseable numbers are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: lookup("TRANSMISSION_RPC_URL").unwrap_or(defaults.url),
            username: lookup("TRANSMISSION_USERNAME"),
            password: lookup("TRANSMISSION_PASSWORD"),
            max_retries: lookup("TRANSMISSION_MAX_RETRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_retries),
            timeout_secs: lookup("TRANSMISSION_TIMEOUT_SECS").and_then(|s| s.parse().ok()),
        }
    }

    /// The per call deadline, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
