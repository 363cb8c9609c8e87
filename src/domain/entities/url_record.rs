//! URL record entity: the persisted mapping between an original URL and its short URL.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// `short_url` is assigned once at creation and never changes afterwards.
/// Records are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: String, short_url: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_url: i64,
}
