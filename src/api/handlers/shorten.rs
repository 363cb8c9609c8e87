//! Handler for the URL shortening endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};

use crate::api::dto::shorten::{ShortenForm, UrlRecordResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl` with form field `url`
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// Submitting a URL that was already shortened returns the stored pair. A body
/// that is not a form is treated as a submission without `url`.
///
/// # Errors
///
/// - `200 {"error": "invalid url"}` for missing, malformed or unresolvable URLs
/// - `500 {"error": "internal server error"}` on store failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let input = form
        .map(|Form(form)| form.url)
        .ok()
        .flatten()
        .unwrap_or_default();

    let record = state.url_service.shorten(&input).await?;

    Ok(Json(record.into()))
}
