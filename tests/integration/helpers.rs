//! Test helpers and utilities

use std::net::SocketAddr;
use std::time::Duration;

use emit::server::{Handler, Server};
use reqwest::{Client, Response, StatusCode};
use tokio::net::TcpListener;

/// In-process server bound to an ephemeral port.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

#[allow(dead_code)]
impl TestServer {
    /// Start serving `handler` in a background task.
    pub async fn start<H: Handler>(handler: H) -> Self {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let server = Server::from_listener(listener, handler).with_access_log(true);
        let addr = server.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            let _ = server.run().await;
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{}", addr),
            client,
        }
    }

    /// Make a GET request to the server
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }
}

/// Assert response has expected status code
pub fn assert_status(resp: &Response, expected: StatusCode) {
    assert_eq!(
        resp.status(),
        expected,
        "Expected status {}, got {}",
        expected,
        resp.status()
    );
}

/// Assert response has header with exact value
pub fn assert_header(resp: &Response, name: &str, expected: &str) {
    let value = resp
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("Header '{}' not found", name))
        .to_str()
        .expect("Invalid header value");
    assert_eq!(value, expected, "Header '{}' mismatch", name);
}

/// Decode a JSON body into a string map
pub async fn json_map(resp: Response) -> std::collections::HashMap<String, String> {
    resp.json().await.expect("Body should be a JSON object")
}
