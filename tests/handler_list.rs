mod common;

use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_list_empty() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/api/shorturl/list").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_projects_two_fields() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    common::shorten(&server, "https://a.example").await;
    common::shorten(&server, "https://b.example").await;

    let response = server.get("/api/shorturl/list").await;
    response.assert_status_ok();

    let items = response.json::<Value>();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        let fields = item.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields["original_url"].is_string());
        assert!(fields["short_url"].is_i64());
    }

    assert!(items.contains(&json!({ "original_url": "https://a.example", "short_url": 1 })));
    assert!(items.contains(&json!({ "original_url": "https://b.example", "short_url": 2 })));
}

#[tokio::test]
async fn test_list_store_failure_is_opaque_500() {
    let state = common::create_state_with(Arc::new(common::BrokenRepository));
    let server = common::test_server(state);

    let response = server.get("/api/shorturl/list").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "internal server error" })
    );
}
