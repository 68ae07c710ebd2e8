//! Configuration management for the gateway.
//!
//! Everything is read from environment variables (optionally seeded from a
//! `.env` file). `SHIPSTATION_API_KEY` is the only mandatory setting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default upstream host; the client appends the `/v2` version prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.shipstation.com";

/// Default per-request upstream timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Front end selection.
    pub transport: TransportConfig,

    /// ShipStation connection settings.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// ShipStation connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Value of the `api-key` header sent with every request.
    pub api_key: String,

    /// Upstream host, without the version prefix.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "shipstation-gateway".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SHIPSTATION_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config("SHIPSTATION_API_KEY environment variable is required"))?;

        let mut upstream = UpstreamConfig::new(api_key);
        if let Some(base_url) = lookup("SHIPSTATION_BASE_URL").filter(|u| !u.trim().is_empty()) {
            upstream.base_url = base_url.trim().to_string();
        }
        if let Some(timeout) = lookup("SHIPSTATION_TIMEOUT_SECS") {
            upstream.timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::config(format!(
                        "SHIPSTATION_TIMEOUT_SECS must be a positive integer, got '{timeout}'"
                    ))
                })?;
        }

        let mut server = ServerConfig::default();
        if let Some(name) = lookup("GATEWAY_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Some(level) = lookup("GATEWAY_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            server,
            logging,
            transport: TransportConfig::from_lookup(&lookup),
            upstream,
        })
    }
}
