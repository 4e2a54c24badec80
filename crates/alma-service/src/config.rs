//! Configuration for alma-service.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listen address.
    pub listen_addr: SocketAddr,

    /// Enable permissive CORS (the UI is served from a separate origin).
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Session bookkeeping.
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".parse().expect("static addr"),
            enable_cors: true,
            sessions: SessionConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Build from environment, falling back to defaults.
    ///
    /// `ALMA_LISTEN_ADDR` overrides the listen address.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("ALMA_LISTEN_ADDR") {
            config.listen_addr = addr.parse()?;
        }
        Ok(config)
    }
}

/// Session manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum concurrent sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Sessions idle longer than this are expired.
    #[serde(default = "default_idle_expiry")]
    pub idle_expiry_minutes: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_expiry_minutes: default_idle_expiry(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_sessions() -> usize {
    1000
}

fn default_idle_expiry() -> i64 {
    60
}
