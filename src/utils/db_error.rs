use crate::error::UniqueKey;

/// Constraint names declared in `migrations/`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "short_urls_original_url_key";
pub const SHORT_URL_CONSTRAINT: &str = "short_urls_short_url_key";

/// Classifies a unique violation by the constraint that fired.
///
/// Returns `None` for any other error, including unique violations on
/// constraints this service does not own.
pub fn unique_violation_key(e: &sqlx::Error) -> Option<UniqueKey> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(ORIGINAL_URL_CONSTRAINT) => Some(UniqueKey::OriginalUrl),
        Some(SHORT_URL_CONSTRAINT) => Some(UniqueKey::ShortUrl),
        _ => None,
    }
}
