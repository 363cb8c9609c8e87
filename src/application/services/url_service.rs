//! URL shortening, resolution and listing.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{FixedInterval, jitter};
use tracing::{debug, info, warn};

use crate::application::services::IdAllocator;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;
use crate::error::{AppError, UniqueKey, ValidationError};
use crate::utils::url_validator::host_to_resolve;

/// Default number of re-allocations after a short URL collision.
pub const DEFAULT_ALLOCATION_RETRIES: usize = 5;

/// Base pause between allocation attempts, before jitter.
const RETRY_INTERVAL_MS: u64 = 10;

/// Service for creating and looking up short URLs.
///
/// Holds no record state of its own: every call reads and writes through the
/// repository.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
    allocator: IdAllocator,
    allocation_retries: usize,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `allocation_retries` bounds how many times a short URL collision with a
    /// concurrent writer is retried before the request fails.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        resolver: Arc<dyn HostResolver>,
        allocation_retries: usize,
    ) -> Self {
        Self {
            allocator: IdAllocator::new(repository.clone()),
            repository,
            resolver,
            allocation_retries,
        }
    }

    /// Shortens `input`, or returns the existing record if it was shortened before.
    ///
    /// # Flow
    ///
    /// 1. Reject empty or malformed input
    /// 2. Resolve the host, rejecting URLs whose host does not resolve
    /// 3. Return the existing record for an identical `original_url`
    /// 4. Otherwise allocate the next short URL and insert a new record
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] for rejected input.
    /// Returns [`AppError::Internal`] on store errors or when allocation
    /// retries are exhausted.
    pub async fn shorten(&self, input: &str) -> Result<UrlRecord, AppError> {
        let host = host_to_resolve(input).map_err(|e| {
            debug!(url = input, reason = %e, "Rejected URL");
            ValidationError::InvalidUrl
        })?;

        if let Err(e) = self.resolver.resolve(&host).await {
            debug!(url = input, reason = %e, "Host lookup failed");
            return Err(ValidationError::InvalidUrl.into());
        }

        if let Some(existing) = self.repository.find_by_original_url(input).await? {
            debug!(short_url = existing.short_url, "URL already shortened");
            metrics::counter!("shorturl_dedup_total").increment(1);
            return Ok(existing);
        }

        self.create_with_retry(input).await
    }

    /// Looks up the record for a short URL given as a path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongFormat`] if `id` is not an integer.
    /// Returns [`AppError::NotFound`] if no record has that short URL.
    pub async fn resolve(&self, id: &str) -> Result<UrlRecord, AppError> {
        let short_url: i64 = id.parse().map_err(|_| ValidationError::WrongFormat)?;

        let record = self
            .repository
            .find_by_short_url(short_url)
            .await?
            .ok_or(AppError::NotFound)?;

        metrics::counter!("shorturl_redirect_total").increment(1);
        Ok(record)
    }

    /// Returns every stored record.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Verifies the store answers queries.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.find_latest().await.map(|_| ())
    }

    async fn create_with_retry(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let strategy = FixedInterval::from_millis(RETRY_INTERVAL_MS)
            .map(jitter)
            .take(self.allocation_retries);

        let result = RetryIf::start(
            strategy,
            move || self.allocate_and_insert(original_url),
            |e: &AppError| {
                let collided = e.is_conflict_on(UniqueKey::ShortUrl);
                if collided {
                    debug!(url = original_url, "Short URL collision, reallocating");
                    metrics::counter!("shorturl_allocation_conflict_total").increment(1);
                }
                collided
            },
        )
        .await;

        match result {
            Ok(record) => {
                info!(
                    short_url = record.short_url,
                    original_url = %record.original_url,
                    "Created short URL"
                );
                metrics::counter!("shorturl_created_total").increment(1);
                Ok(record)
            }
            // A concurrent request inserted the same URL first.
            Err(e) if e.is_conflict_on(UniqueKey::OriginalUrl) => {
                debug!(url = original_url, "Lost insert race, returning stored record");
                self.repository
                    .find_by_original_url(original_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "Conflicting record disappeared",
                            json!({ "original_url": original_url }),
                        )
                    })
            }
            Err(e) if e.is_conflict_on(UniqueKey::ShortUrl) => {
                warn!(
                    url = original_url,
                    attempts = self.allocation_retries + 1,
                    "Short URL allocation retries exhausted"
                );
                Err(AppError::internal(
                    "Short URL allocation retries exhausted",
                    json!({ "attempts": self.allocation_retries + 1 }),
                ))
            }
            Err(e) => Err(e),
        }
    }

    async fn allocate_and_insert(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let short_url = self.allocator.next_identifier().await?;

        self.repository
            .create(NewUrlRecord {
                original_url: original_url.to_string(),
                short_url,
            })
            .await
    }
}
