//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistent collection of URL records.
///
/// Implementations must enforce uniqueness of both `original_url` and
/// `short_url` atomically at insert time.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] naming the violated key if either the
    /// original URL or the short URL is already stored.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds the record whose original URL equals `original_url` exactly.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record with the given short URL.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Returns the record with the highest short URL, if any.
    async fn find_latest(&self) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every stored record in store-defined order.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;
}
