//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Form body of `POST /api/shorturl`.
///
/// `url` is optional so that a missing field is reported as `invalid url`
/// instead of a form rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: Option<String>,
}

/// Public projection of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecordResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
