//! Integration tests for Course Shop.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare a database with the demo data set
//! cargo run -p course-shop-cli -- migrate
//! cargo run -p course-shop-cli -- seed --reset
//!
//! # Start the API, then run the ignored tests against it
//! cargo run -p course-shop-api &
//! cargo test -p course-shop-integration-tests -- --ignored
//! ```
//!
//! Tests expect the seeded data set and read the server address from
//! `SHOP_BASE_URL` (default `http://localhost:8080`).

use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHOP_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// GET `path` and return the status and the parsed JSON body.
///
/// # Panics
///
/// Panics if the request fails or the body is not JSON.
pub async fn get_json(client: &Client, path: &str) -> (StatusCode, Value) {
    let resp = client
        .get(format!("{}{path}", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    let status = resp.status();
    let body = resp.json().await.expect("Response body is not JSON");
    (status, body)
}
