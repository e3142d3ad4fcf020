//! In-memory response sink.

use bytes::{Bytes, BytesMut};
use http::header::{self, HeaderName};
use http::{HeaderMap, HeaderValue, StatusCode};
use http_body_util::Full;
use tracing::debug;

use super::ResponseSink;
use crate::cookie::{encode_set_cookie, Cookie};
use crate::error::{Error, Result};

/// Sink that buffers a response in memory.
///
/// Behaves like a transport: the first status written wins, headers are
/// frozen once the status is out, and writing a body before any status
/// commits 200. Hosts turn the recording into an `http::Response` with
/// [`into_response`](Self::into_response); tests inspect it directly.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    code: Option<u16>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseRecorder {
    /// Create an empty recorder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status code written so far (200 if none).
    #[inline]
    pub fn code(&self) -> u16 {
        self.code.unwrap_or(200)
    }

    /// Whether a status code has been written.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.code.is_some()
    }

    /// Recorded headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value by name (case-insensitive).
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Recorded body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Recorded body as UTF-8 (lossy).
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Cookies sent through `Set-Cookie`, in the order they were appended.
    pub fn cookies(&self) -> Vec<Cookie<'static>> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|s| Cookie::parse_encoded(s.to_string()).ok())
            .collect()
    }

    /// Convert the recording into a response hyper can send.
    pub fn into_response(self) -> Result<http::Response<Full<Bytes>>> {
        let code = self.code();
        let status = StatusCode::from_u16(code).map_err(|_| Error::InvalidStatus(code))?;

        let mut response = http::Response::new(Full::new(self.body.freeze()));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        Ok(response)
    }
}

impl ResponseSink for ResponseRecorder {
    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        if self.is_committed() {
            debug!(header = name, "header set after status was written, ignored");
            return Ok(());
        }

        let header_name = HeaderName::try_from(name).map_err(|e| Error::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let header_value = HeaderValue::try_from(value).map_err(|e| Error::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.headers.insert(header_name, header_value);
        Ok(())
    }

    fn append_cookie(&mut self, cookie: &Cookie<'_>) -> Result<()> {
        if self.is_committed() {
            debug!(cookie = cookie.name(), "cookie set after status was written, ignored");
            return Ok(());
        }

        let value = encode_set_cookie(cookie)?;
        self.headers.append(header::SET_COOKIE, value);
        Ok(())
    }

    fn write_status(&mut self, code: u16) {
        match self.code {
            Some(written) => {
                debug!(written, ignored = code, "superfluous status write");
            }
            None => self.code = Some(code),
        }
    }

    fn write_body(&mut self, body: &[u8]) -> Result<usize> {
        if self.code.is_none() {
            self.code = Some(200);
        }
        self.body.extend_from_slice(body);
        Ok(body.len())
    }
}
