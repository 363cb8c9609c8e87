#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use shorturl::api;
use shorturl::api::handlers::health_handler;
use shorturl::application::services::{DEFAULT_ALLOCATION_RETRIES, UrlService};
use shorturl::domain::entities::{NewUrlRecord, UrlRecord};
use shorturl::domain::repositories::UrlRepository;
use shorturl::domain::resolver::{HostResolver, ResolveError};
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::state::AppState;
use std::sync::Arc;

/// Resolves every host except those under the reserved `.invalid` TLD.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if host.ends_with(".invalid") {
            Err(ResolveError::new(host, "NXDOMAIN"))
        } else {
            Ok(())
        }
    }
}

/// Repository whose every call fails like a lost database connection.
pub struct BrokenRepository;

fn connection_lost() -> AppError {
    AppError::internal("Database error", json!({ "reason": "connection refused" }))
}

#[async_trait]
impl UrlRepository for BrokenRepository {
    async fn create(&self, _new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        Err(connection_lost())
    }

    async fn find_by_original_url(
        &self,
        _original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Err(connection_lost())
    }

    async fn find_by_short_url(&self, _short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(connection_lost())
    }

    async fn find_latest(&self) -> Result<Option<UrlRecord>, AppError> {
        Err(connection_lost())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Err(connection_lost())
    }
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(
        repository,
        Arc::new(StubResolver),
        DEFAULT_ALLOCATION_RETRIES,
    ));

    AppState::new(url_service)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    (create_state_with(repository.clone()), repository)
}

/// API routes nested under `/api` plus `/health`, as mounted by the server.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", axum::routing::get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Shortens `url` through the API and returns the assigned short URL.
pub async fn shorten(server: &TestServer, url: &str) -> i64 {
    let response = server
        .post("/api/shorturl")
        .form(&json!({ "url": url }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["short_url"]
        .as_i64()
        .unwrap()
}
