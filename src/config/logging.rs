//! Logging configuration.

use super::parse::env_or;
use super::ConfigError;

/// Filter used when neither `LOG_LEVEL` nor `RUST_LOG` is usable.
const DEFAULT_FILTER: &str = "emit=info";

/// Levels accepted by `LOG_LEVEL`.
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
    /// Service name written to the `ctx` of every log line.
    pub service_name: String,
    /// Unrecognized `LOG_LEVEL` value, reported once logging is up.
    pub rejected_level: Option<String>,
}

impl LoggingConfig {
    /// Load from `LOG_LEVEL`, `RUST_LOG` and `SERVICE_NAME`.
    ///
    /// `LOG_LEVEL` (a bare level, applied to this crate) beats `RUST_LOG`
    /// (full filter syntax); both missing means `emit=info`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = std::env::var("LOG_LEVEL").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let (filter, rejected_level) = filter_from(log_level.as_deref(), rust_log.as_deref());

        Ok(Self {
            filter,
            service_name: env_or("SERVICE_NAME", "emit"),
            rejected_level,
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            service_name: "emit".to_string(),
            rejected_level: None,
        }
    }
}

/// Pick the filter directive; also returns a `LOG_LEVEL` that was ignored.
fn filter_from(log_level: Option<&str>, rust_log: Option<&str>) -> (String, Option<String>) {
    let mut rejected = None;

    if let Some(level) = log_level {
        let level = level.to_lowercase();
        if LEVELS.contains(&level.as_str()) {
            return (format!("emit={}", level), None);
        }
        rejected = Some(level);
    }

    let filter = rust_log
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string();
    (filter, rejected)
}
