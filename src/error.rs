//! Error types for response sinks.
//!
//! The builder itself never returns these: they are produced by
//! [`ResponseSink`](crate::ResponseSink) implementations and absorbed (and
//! logged) by the builder.

use std::fmt;

/// Errors raised while handing response metadata or bytes to a sink.
#[derive(Debug)]
pub enum Error {
    /// Header name or value the sink cannot represent.
    InvalidHeader { name: String, reason: String },

    /// Cookie that cannot be written as a `Set-Cookie` entry.
    InvalidCookie(String),

    /// Status code outside the range the transport accepts.
    InvalidStatus(u16),

    /// I/O error.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHeader { name, reason } => {
                write!(f, "invalid header '{}': {}", name, reason)
            }
            Error::InvalidCookie(msg) => write!(f, "invalid cookie: {}", msg),
            Error::InvalidStatus(code) => write!(f, "invalid status code: {}", code),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for sink operations.
pub type Result<T> = std::result::Result<T, Error>;
