//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `GET  /health`    - Health check
//! - `/api/shorturl*`  - Short URL API
//! - `/public/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Timeout** - Requests exceeding the configured limit get `408`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing as request_tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served under `/public`
/// - `request_timeout` - upper bound on handling time for a single request
pub fn app_router(
    state: AppState,
    public_dir: &str,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(request_tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
