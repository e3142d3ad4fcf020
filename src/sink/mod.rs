//! Response sinks.
//!
//! A sink is whatever the host framework uses to carry one response out: it
//! accepts headers, cookies, a status code, and body bytes. The builder only
//! talks to this trait.

mod recorder;

pub use recorder::ResponseRecorder;

use crate::cookie::Cookie;
use crate::error::Result;

/// Destination for a single HTTP response.
pub trait ResponseSink {
    /// Set a single-valued header, replacing any previous value.
    fn set_header(&mut self, name: &str, value: &str) -> Result<()>;

    /// Append one `Set-Cookie` entry.
    fn append_cookie(&mut self, cookie: &Cookie<'_>) -> Result<()>;

    /// Write the status code. Only the first call takes effect.
    fn write_status(&mut self, code: u16);

    /// Write body bytes. Commits status 200 if no status was written yet.
    fn write_body(&mut self, body: &[u8]) -> Result<usize>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for Box<S> {
    #[inline]
    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        (**self).set_header(name, value)
    }

    #[inline]
    fn append_cookie(&mut self, cookie: &Cookie<'_>) -> Result<()> {
        (**self).append_cookie(cookie)
    }

    #[inline]
    fn write_status(&mut self, code: u16) {
        (**self).write_status(code)
    }

    #[inline]
    fn write_body(&mut self, body: &[u8]) -> Result<usize> {
        (**self).write_body(body)
    }
}
