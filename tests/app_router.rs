mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use shorturl::routes::app_router;
use std::time::Duration;
use tower::ServiceExt;

async fn send(request: Request<Body>) -> Response {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state, "public", Duration::from_secs(30));

    app.oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_landing_page() {
    let response = send(Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("action=\"/api/shorturl\""));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_static_assets() {
    let response = send(Request::get("/public/style.css").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let response = send(
        Request::get("/api/shorturl/list/")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = send(
        Request::get("/api/shorturl/list")
            .header(header::ORIGIN, "https://www.freecodecamp.org")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_form_post_through_full_stack() {
    let response = send(
        Request::post("/api/shorturl")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("url=https%3A%2F%2Fwww.rust-lang.org"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        r#"{"original_url":"https://www.rust-lang.org","short_url":1}"#
    );
}
