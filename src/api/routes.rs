//! API route configuration.

use crate::api::handlers::{list_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /shorturl`              - Shorten a URL (form field `url`)
/// - `GET  /shorturl/list`         - List all mappings
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/list", get(list_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
