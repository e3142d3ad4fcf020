//! Set-Cookie handling.

use crate::helpers::*;
use emit::{Cookie, ResponseRecorder, SameSite};
use http::request::Parts;
use reqwest::StatusCode;

fn handler(request: &Parts, response: &mut ResponseRecorder) {
    let session = Cookie::build(("session", "abc123"))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    let theme = Cookie::new("theme", "dark");

    let builder = emit::new(response);
    match request.uri.path() {
        "/one" => builder.cookie(Some(&session)).text("OK"),
        "/two" => builder
            .cookie(Some(&session))
            .cookie(None)
            .cookie(Some(&theme))
            .text("OK"),
        _ => builder.cookie(None).text("OK"),
    }
}

fn set_cookies(resp: &reqwest::Response) -> Vec<Cookie<'static>> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| Cookie::parse_encoded(v.to_str().unwrap().to_string()).unwrap())
        .collect()
}

#[tokio::test]
async fn test_single_cookie() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/one").await;

    assert_status(&resp, StatusCode::OK);
    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name(), "session");
    assert_eq!(cookies[0].value(), "abc123");
    assert_eq!(cookies[0].path(), Some("/"));
    assert_eq!(cookies[0].http_only(), Some(true));
    assert_eq!(cookies[0].same_site(), Some(SameSite::Lax));
}

#[tokio::test]
async fn test_cookies_accumulate() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/two").await;

    let names: Vec<_> = set_cookies(&resp)
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, ["session", "theme"]);
}

#[tokio::test]
async fn test_none_cookie_sends_nothing() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/none").await;

    assert!(resp.headers().get("set-cookie").is_none());
}
