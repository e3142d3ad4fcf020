//! Fluent response builder.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cookie::Cookie;
use crate::sink::ResponseSink;

/// Header names the builder writes itself.
mod header_names {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
}

/// Content types for the terminal operations.
mod content_types {
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const APPLICATION_JSON: &str = "application/json";
}

const STATUS_OK: u16 = 200;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Body sent when a JSON payload fails to encode.
static ENCODE_FAILURE_BODY: &[u8] = b"{\"error\":\"failed to encode response\"}";

/// Error payload shape: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Builder for a single HTTP response.
///
/// Configuration calls (`status`, `header`, `cookie`) take and return the
/// builder; terminal calls (`text`, `json`, `json_empty`, `error_json`,
/// `no_content`) consume it and write everything through the sink.
///
/// ```rust
/// use emit::{ResponseBuilder, ResponseRecorder};
///
/// let mut rec = ResponseRecorder::new();
/// ResponseBuilder::new(&mut rec)
///     .status(201)
///     .header("X-Request-Id", "abc")
///     .text("Created");
///
/// assert_eq!(rec.code(), 201);
/// assert_eq!(rec.body_str(), "Created");
/// ```
#[must_use = "a response is only sent by a terminal call"]
pub struct ResponseBuilder<'a, S: ResponseSink + ?Sized> {
    sink: &'a mut S,
    status: u16,
    headers: HashMap<String, String>,
}

impl<'a, S: ResponseSink + ?Sized> ResponseBuilder<'a, S> {
    /// Create a builder bound to `sink`, with status 200 and no headers.
    #[inline]
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            status: STATUS_OK,
            headers: HashMap::new(),
        }
    }

    /// Set the status code. Not validated; the last call wins.
    #[inline]
    pub fn status(mut self, code: u16) -> Self {
        self.status = code;
        self
    }

    /// Set a response header. Applied when the response is sent.
    #[inline]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a cookie to the response right away. `None` is ignored.
    pub fn cookie(self, cookie: Option<&Cookie<'_>>) -> Self {
        if let Some(cookie) = cookie {
            if let Err(e) = self.sink.append_cookie(cookie) {
                debug!(cookie = cookie.name(), error = %e, "cookie dropped");
            }
        }
        self
    }

    /// Send `body` as a `text/plain` response.
    pub fn text(mut self, body: impl AsRef<str>) {
        self.set_content_type(content_types::TEXT_PLAIN);
        let status = self.status;
        self.commit(status, Some(body.as_ref().as_bytes()));
    }

    /// Send `data` encoded as JSON.
    ///
    /// The value is encoded before anything is written. If encoding fails the
    /// response becomes a 500 with `{"error":"failed to encode response"}`.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) {
        self.set_content_type(content_types::APPLICATION_JSON);
        let status = self.status;

        match serde_json::to_vec(data) {
            Ok(mut body) => {
                body.push(b'\n');
                self.commit(status, Some(&body));
            }
            Err(e) => {
                warn!(error = %e, "failed to encode JSON response");
                self.commit(STATUS_INTERNAL_SERVER_ERROR, Some(ENCODE_FAILURE_BODY));
            }
        }
    }

    /// Send an `application/json` response with no body.
    pub fn json_empty(mut self) {
        self.set_content_type(content_types::APPLICATION_JSON);
        let status = self.status;
        self.commit(status, None);
    }

    /// Send `{"error": message}` as JSON.
    ///
    /// A status still at 200 is turned into 500; any other status is kept.
    pub fn error_json(mut self, message: impl AsRef<str>) {
        self.force_header(header_names::CONTENT_TYPE_OPTIONS, "nosniff");

        if self.status == STATUS_OK {
            self.status = STATUS_INTERNAL_SERVER_ERROR;
        }

        self.json(&ErrorBody {
            error: message.as_ref(),
        });
    }

    /// Send a 204 response with no body, whatever status was set.
    pub fn no_content(self) {
        self.commit(STATUS_NO_CONTENT, None);
    }

    #[inline]
    fn set_content_type(&mut self, content_type: &str) {
        self.force_header(header_names::CONTENT_TYPE, content_type);
    }

    /// Set a header the builder owns, replacing the caller's value under any
    /// casing so exactly one key reaches the sink.
    fn force_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Apply headers, write the status, then the body.
    fn commit(self, status: u16, body: Option<&[u8]>) {
        for (key, value) in &self.headers {
            if let Err(e) = self.sink.set_header(key, value) {
                debug!(header = %key, error = %e, "header dropped");
            }
        }

        self.sink.write_status(status);

        if let Some(body) = body {
            if let Err(e) = self.sink.write_body(body) {
                debug!(status, error = %e, "response body write failed");
            }
        }
    }
}
