//! JSON and error JSON responses.

use std::collections::BTreeMap;

use crate::helpers::*;
use emit::ResponseRecorder;
use http::request::Parts;
use reqwest::StatusCode;
use serde::ser::{Error as _, Serialize, Serializer};

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("not encodable"))
    }
}

fn handler(request: &Parts, response: &mut ResponseRecorder) {
    let message = BTreeMap::from([("message", "Hello")]);
    let builder = emit::new(response);
    match request.uri.path() {
        "/json" => builder.json(&message),
        "/created" => builder.status(201).json(&message),
        "/json-empty" => builder.json_empty(),
        "/error" => builder.error_json("Something went wrong"),
        "/bad-request" => builder.status(400).error_json("Something went wrong"),
        "/unencodable" => builder.status(201).json(&Unencodable),
        _ => builder.status(404).error_json("not found"),
    }
}

#[tokio::test]
async fn test_json() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/json").await;

    assert_status(&resp, StatusCode::OK);
    assert_header(&resp, "content-type", "application/json");
    assert_eq!(json_map(resp).await["message"], "Hello");
}

#[tokio::test]
async fn test_json_with_status() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/created").await;

    assert_status(&resp, StatusCode::CREATED);
    assert_header(&resp, "content-type", "application/json");
    assert_eq!(json_map(resp).await["message"], "Hello");
}

#[tokio::test]
async fn test_json_empty() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/json-empty").await;

    assert_status(&resp, StatusCode::OK);
    assert_header(&resp, "content-type", "application/json");
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_json() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/error").await;

    assert_status(&resp, StatusCode::INTERNAL_SERVER_ERROR);
    assert_header(&resp, "content-type", "application/json");
    assert_header(&resp, "x-content-type-options", "nosniff");
    assert_eq!(json_map(resp).await["error"], "Something went wrong");
}

#[tokio::test]
async fn test_error_json_with_status() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/bad-request").await;

    assert_status(&resp, StatusCode::BAD_REQUEST);
    assert_header(&resp, "x-content-type-options", "nosniff");
    assert_eq!(json_map(resp).await["error"], "Something went wrong");
}

/// Encoding failure yields a single well-formed 500
#[tokio::test]
async fn test_encode_failure() {
    let server = TestServer::start(handler).await;
    let resp = server.get("/unencodable").await;

    assert_status(&resp, StatusCode::INTERNAL_SERVER_ERROR);
    assert_header(&resp, "content-type", "application/json");
    assert_eq!(json_map(resp).await["error"], "failed to encode response");
}
