//! Process-local URL repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, UniqueKey};

/// In-memory implementation of [`UrlRepository`].
///
/// Records are kept in insertion order. The uniqueness check and the insert
/// happen under one write lock, so concurrent inserts observe the same
/// constraints as the PostgreSQL table.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: RwLock<Vec<UrlRecord>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|r| r.original_url == new_record.original_url)
        {
            return Err(AppError::Conflict {
                key: UniqueKey::OriginalUrl,
            });
        }
        if records.iter().any(|r| r.short_url == new_record.short_url) {
            return Err(AppError::Conflict {
                key: UniqueKey::ShortUrl,
            });
        }

        let record = UrlRecord::new(new_record.original_url, new_record.short_url, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.short_url == short_url).cloned())
    }

    async fn find_latest(&self) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().max_by_key(|r| r.short_url).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }
}
