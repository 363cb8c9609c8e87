//! Handler for listing all short URLs.

use axum::{Json, extract::State};

use crate::api::dto::shorten::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping.
///
/// # Endpoint
///
/// `GET /api/shorturl/list`
///
/// # Response
///
/// ```json
/// [{ "original_url": "https://example.com", "short_url": 1 }]
/// ```
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordResponse>>, AppError> {
    let records = state.url_service.list_all().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
