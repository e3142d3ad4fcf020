//! Server configuration.

use std::net::SocketAddr;

use super::parse::{env_bool, env_parse};
use super::ConfigError;

/// Default listen address.
const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);

/// Server configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address (default: 127.0.0.1:8080).
    pub listen_addr: SocketAddr,
    /// Write one access log line per response.
    pub access_log: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_addr: env_parse("LISTEN_ADDR", SocketAddr::from(DEFAULT_LISTEN_ADDR))?,
            access_log: env_bool("ACCESS_LOG", false),
        })
    }

    /// Create config for the given address (access log off).
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            access_log: false,
        }
    }

    /// Enable or disable access logging.
    pub fn with_access_log(mut self, enabled: bool) -> Self {
        self.access_log = enabled;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(DEFAULT_LISTEN_ADDR))
    }
}
