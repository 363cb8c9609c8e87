//! Sequential short URL allocation.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use serde_json::json;

/// First short URL handed out on an empty store.
pub const FIRST_SHORT_URL: i64 = 1;

/// Computes the next short URL as the current maximum plus one.
///
/// The read and the following insert are not atomic. Two concurrent callers
/// may receive the same value; the store's uniqueness constraint rejects the
/// second insert and [`super::UrlService`] retries the allocation.
pub struct IdAllocator {
    repository: Arc<dyn UrlRepository>,
}

impl IdAllocator {
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the short URL to assign to the next new record.
    ///
    /// # Errors
    ///
    /// Propagates store errors; no identifier is produced in that case.
    pub async fn next_identifier(&self) -> Result<i64, AppError> {
        let Some(latest) = self.repository.find_latest().await? else {
            return Ok(FIRST_SHORT_URL);
        };

        latest.short_url.checked_add(1).ok_or_else(|| {
            AppError::internal(
                "Short URL space exhausted",
                json!({ "max_short_url": latest.short_url }),
            )
        })
    }
}
