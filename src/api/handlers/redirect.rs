//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored original URL.
///
/// # Errors
///
/// - `400 {"error": "wrong format"}` if `short_url` is not an integer
/// - `404 {"error": "No short URL found for the given input"}`
/// - `500 {"error": "internal server error"}` on store failures
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.resolve(&short_url).await?;

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, falling back to the parser's ASCII
/// serialization when the stored string is not a valid header value.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL is not a valid Location header",
                json!({ "original_url": original_url }),
            )
        })
}
