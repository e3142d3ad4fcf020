//! Configuration for the demo host and logging.
//!
//! All values come from environment variables.
//!
//! # Example
//!
//! ```rust,no_run
//! use emit::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Listen address: {}", config.server.listen_addr);
//! # Ok::<(), emit::config::ConfigError>(())
//! ```

mod error;
mod logging;
mod parse;
mod server;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use parse::{env_bool, env_or, env_parse};
pub use server::ServerConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Listen: {}", self.server.listen_addr);
        info!("  Log filter: {}", self.logging.filter);
        info!("  Service: {}", self.logging.service_name);

        if self.server.access_log {
            info!("  Access log: enabled");
        }

        if let Some(ref level) = self.logging.rejected_level {
            tracing::warn!(
                "Ignored LOG_LEVEL '{}', expected one of: trace, debug, info, warn, error",
                level
            );
        }
    }
}
