//! emit - fluent HTTP response builder.
//!
//! A [`ResponseBuilder`] wraps a [`ResponseSink`] for one response. Chain
//! `status`, `header` and `cookie` calls, then finish with exactly one
//! terminal call: `text`, `json`, `json_empty`, `error_json` or
//! `no_content`.
//!
//! # Features
//!
//! - **Single commit**: headers, status and body are written once, by the
//!   terminal call. Terminal calls consume the builder.
//! - **JSON without double writes**: payloads are encoded before anything is
//!   sent, so an encoding failure still yields one well-formed 500 response.
//! - **Best-effort delivery**: sink errors are logged with `tracing` and never
//!   returned to the handler.
//! - **hyper host**: [`server::Server`] runs handlers over HTTP/1.
//!
//! # Example
//!
//! ```rust
//! use emit::{Cookie, ResponseRecorder};
//!
//! let mut rec = ResponseRecorder::new();
//! let session = Cookie::new("session", "abc123");
//!
//! emit::new(&mut rec)
//!     .status(400)
//!     .cookie(Some(&session))
//!     .error_json("missing field: name");
//!
//! assert_eq!(rec.code(), 400);
//! assert_eq!(rec.header("x-content-type-options"), Some("nosniff"));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars), empty when unknown
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 ()"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod builder;
pub mod config;
pub mod cookie;
pub mod error;
pub mod logging;
pub mod server;
pub mod sink;

// Re-exports for convenience
pub use crate::builder::ResponseBuilder;
pub use crate::cookie::{Cookie, SameSite};
pub use crate::error::{Error, Result};
pub use crate::sink::{ResponseRecorder, ResponseSink};

/// Start a response on `sink`. Same as [`ResponseBuilder::new`].
#[inline]
pub fn new<S: ResponseSink + ?Sized>(sink: &mut S) -> ResponseBuilder<'_, S> {
    ResponseBuilder::new(sink)
}
