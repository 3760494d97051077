//! Server configuration loaded from `config.toml`.
//!
//! All fields have defaults so the webhook runs with an empty or missing
//! file. API credentials are *not* part of this file -- they come from
//! environment variables (see the infra crate's secrets loader).

use serde::{Deserialize, Serialize};

/// Top-level configuration for the webhook server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Idle sessions older than this are evicted from the session map.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Bounded per-call timeout for every outbound collaborator request.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_session_ttl_secs() -> u64 {
    1800
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_ttl_secs, 1800);
        assert_eq!(config.upstream_timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.session_ttl_secs, 1800);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
    }
}
