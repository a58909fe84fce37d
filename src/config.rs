//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which store implementation the service runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Remote Redis server reached through `redis_url`
    Redis,
    /// In-process keyspace, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URI (host, port, credentials, db)
    pub redis_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Delay in milliseconds between streamed records
    pub stream_delay_ms: u64,
    /// Upper bound in seconds on any single store operation
    pub store_timeout: u64,
    /// Store implementation
    pub backend: StoreBackend,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Store URI (default: redis://127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `STREAM_DELAY_MS` - Delay between streamed records (default: 1000)
    /// - `STORE_TIMEOUT_SECS` - Store operation timeout (default: 5)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            stream_delay_ms: parse_var("STREAM_DELAY_MS").unwrap_or(defaults.stream_delay_ms),
            store_timeout: parse_var("STORE_TIMEOUT_SECS").unwrap_or(defaults.store_timeout),
            backend: parse_var("STORE_BACKEND").unwrap_or(defaults.backend),
        }
    }

    pub fn stream_delay(&self) -> Duration {
        Duration::from_millis(self.stream_delay_ms)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            server_port: 8080,
            stream_delay_ms: 1000,
            store_timeout: 5,
            backend: StoreBackend::Redis,
        }
    }
}
