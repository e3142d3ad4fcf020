//! Text, status and header handling over a real connection.

use crate::helpers::*;
use emit::ResponseRecorder;
use http::request::Parts;
use reqwest::StatusCode;

fn handler(request: &Parts, response: &mut ResponseRecorder) {
    let builder = emit::new(response);
    match request.uri.path() {
        "/text" => builder.text("Hello, world!"),
        "/accepted" => builder.status(202).text("Hello, world!"),
        "/header" => builder
            .header("X-Custom-Header", "first")
            .header("X-Custom-Header", "Value")
            .text("OK"),
        "/empty" => builder.status(201).header("X-Kept", "yes").no_content(),
        "/invalid-status" => builder.status(42).text("unreachable"),
        _ => builder.status(404).text("Not Found"),
    }
}

/// Text response with default status
#[tokio::test]
async fn test_text() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/text").await;

    assert_status(&resp, StatusCode::OK);
    assert_header(&resp, "content-type", "text/plain");
    assert_eq!(resp.text().await.unwrap(), "Hello, world!");
}

/// Explicit status is sent
#[tokio::test]
async fn test_text_with_status() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/accepted").await;

    assert_status(&resp, StatusCode::ACCEPTED);
    assert_eq!(resp.text().await.unwrap(), "Hello, world!");
}

/// Last header value wins, and only one is sent
#[tokio::test]
async fn test_header_last_write_wins() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/header").await;

    assert_eq!(resp.headers().get_all("x-custom-header").iter().count(), 1);
    assert_header(&resp, "x-custom-header", "Value");
}

/// No content ignores the configured status
#[tokio::test]
async fn test_no_content() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/empty").await;

    assert_status(&resp, StatusCode::NO_CONTENT);
    assert_header(&resp, "x-kept", "yes");
    assert!(resp.bytes().await.unwrap().is_empty());
}

/// A status hyper cannot send turns into a plain 500
#[tokio::test]
async fn test_invalid_status() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/invalid-status").await;

    assert_status(&resp, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Unknown path
#[tokio::test]
async fn test_not_found() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/nope").await;

    assert_status(&resp, StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "Not Found");
}
