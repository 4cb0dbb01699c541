//! Integration tests for the `/Categories` resource.
//!
//! These tests require:
//! - A `PostgreSQL` database migrated and seeded with `shop-cli seed --reset`
//! - The API server running (cargo run -p course-shop-api)

use course_shop_integration_tests::get_json;
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_list_categories() {
    let client = Client::new();
    let (status, body) = get_json(&client, "/Categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Electronics" },
            { "id": 2, "name": "Books" },
            { "id": 3, "name": "Computers" },
        ])
    );
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_show_category() {
    let client = Client::new();
    let (status, body) = get_json(&client, "/Categories/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 3, "name": "Computers" }));
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_missing_category_is_404() {
    let client = Client::new();
    let (status, body) = get_json(&client, "/Categories/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: Category 9999");
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_repeated_list_is_identical() {
    let client = Client::new();
    let first = get_json(&client, "/Categories").await;
    let second = get_json(&client, "/Categories").await;

    assert_eq!(first, second);
}
