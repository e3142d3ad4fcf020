//! Integration tests for emit
//!
//! Each test serves a handler through `emit::server::Server` on an ephemeral
//! local port and talks to it with reqwest.

mod helpers;

mod http_basic;
mod json;
mod cookies;
