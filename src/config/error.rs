//! Configuration error types.

use std::fmt;

/// An environment variable that is set but cannot be used.
///
/// Unset and empty variables never produce this: they take their defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// `key` holds `value`, which does not parse as the expected type.
    Parse {
        key: String,
        value: String,
        error: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { key, value, error } => {
                write!(f, "invalid {}='{}': {}", key, value, error)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
