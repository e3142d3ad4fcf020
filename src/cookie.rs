//! `Set-Cookie` encoding.

use http::HeaderValue;

use crate::error::{Error, Result};

pub use ::cookie::{Cookie, Expiration, SameSite};

/// Encode a cookie as a `Set-Cookie` header value.
///
/// Cookies with an empty name or a name containing non-token characters are
/// rejected. The value is percent-encoded, attributes are written as-is.
pub fn encode_set_cookie(cookie: &Cookie<'_>) -> Result<HeaderValue> {
    let name = cookie.name();
    if name.is_empty() {
        return Err(Error::InvalidCookie("empty cookie name".to_string()));
    }
    if !name.bytes().all(is_token_byte) {
        return Err(Error::InvalidCookie(format!(
            "cookie name '{}' contains invalid characters",
            name
        )));
    }

    let encoded = cookie.encoded().to_string();
    HeaderValue::try_from(encoded).map_err(|e| Error::InvalidCookie(e.to_string()))
}

/// RFC 7230 `tchar`.
#[inline]
fn is_token_byte(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
        | b'^' | b'_' | b'`' | b'|' | b'~'
        | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}
