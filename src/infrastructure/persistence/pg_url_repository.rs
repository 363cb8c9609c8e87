//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UrlRecordRow {
    original_url: String,
    short_url: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRecordRow> for UrlRecord {
    fn from(row: UrlRecordRow) -> Self {
        UrlRecord::new(row.original_url, row.short_url, row.created_at)
    }
}

/// PostgreSQL repository over the `short_urls` table.
///
/// Uniqueness of `original_url` and `short_url` is enforced by table
/// constraints; violations surface as [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            INSERT INTO short_urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING original_url, short_url, created_at
            "#,
        )
        .bind(&new_record.original_url)
        .bind(new_record.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT original_url, short_url, created_at
            FROM short_urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT original_url, short_url, created_at
            FROM short_urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_latest(&self) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT original_url, short_url, created_at
            FROM short_urls
            ORDER BY short_url DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT original_url, short_url, created_at
            FROM short_urls
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
