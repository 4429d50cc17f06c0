//! Runtime configuration for the preview engine.
//!
//! Everything is environment-driven; the core itself takes no
//! configuration.
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BIND_ADDRESS`: bind address (default: 0.0.0.0)
//! - `MAX_BATCH_ORDERS`: maximum drafts per preview request (default: 200)

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for REST endpoints (/health, /v1/preview).
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Maximum number of drafts accepted in one preview request.
    #[serde(default = "default_max_batch_orders")]
    pub max_batch_orders: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
            max_batch_orders: default_max_batch_orders(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_port: env_parsed("HTTP_PORT", defaults.http_port),
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            max_batch_orders: env_parsed("MAX_BATCH_ORDERS", defaults.max_batch_orders),
        }
    }
}

fn env_parsed<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Unparseable value, using default");
            default
        }),
        Err(_) => default,
    }
}

const fn default_http_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

const fn default_max_batch_orders() -> usize {
    200
}
