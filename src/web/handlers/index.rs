//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html` with a usage form for `POST /api/shorturl`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
