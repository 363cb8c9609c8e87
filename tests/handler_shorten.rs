mod common;

use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_first_url_gets_one() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shorturl")
        .form(&json!({ "url": "https://www.freecodecamp.org" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (state, repo) = common::create_test_state();
    let server = common::test_server(state);

    let first = common::shorten(&server, "https://example.com/page").await;
    let second = common::shorten(&server, "https://example.com/page").await;

    assert_eq!(first, second);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_shorten_assigns_sequential_short_urls() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let urls = [
        "https://a.example",
        "https://b.example",
        "https://c.example/path",
        "http://d.example:8080/?q=1",
    ];

    for (i, url) in urls.iter().enumerate() {
        assert_eq!(common::shorten(&server, url).await, i as i64 + 1);
    }
}

#[tokio::test]
async fn test_shorten_stores_input_verbatim() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    common::shorten(&server, "https://example.com").await;
    let other = common::shorten(&server, "https://example.com/").await;

    // Different strings are different records even if they normalize alike.
    assert_eq!(other, 2);
}

#[tokio::test]
async fn test_shorten_invalid_urls() {
    let (state, repo) = common::create_test_state();
    let server = common::test_server(state);

    for url in [
        "",
        "not a url",
        "example.com",
        "ftp:/john-doe.invalid",
        "http://this-host-does-not-exist.invalid",
    ] {
        let response = server
            .post("/api/shorturl")
            .form(&json!({ "url": url }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "invalid url" }),
            "{url:?} should be rejected"
        );
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shorturl")
        .form(&json!({ "other": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["error"], "invalid url");
}

#[tokio::test]
async fn test_shorten_accepts_non_http_scheme() {
    let (state, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shorturl")
        .form(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "original_url": "ftp://example.com/file", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_without_body() {
    let (state, repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.post("/api/shorturl").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": "invalid url" }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_json_body_is_not_a_form() {
    let (state, repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": "invalid url" }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_store_failure_is_opaque_500() {
    let state = common::create_state_with(Arc::new(common::BrokenRepository));
    let server = common::test_server(state);

    let response = server
        .post("/api/shorturl")
        .form(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "internal server error" })
    );
}
